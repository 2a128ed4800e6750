//! Cart existence checks against the checkout-owned cart table.

use sqlx::PgPool;

use cartmask_core::CartId;

use super::RepositoryError;
use crate::resolver::CartExistenceChecker;
use crate::store::StoreContext;

/// Repository for cart existence probes.
///
/// The cart table belongs to the checkout service; this repository issues a
/// single `EXISTS` query and never selects cart columns, so schema churn over
/// there cannot break us.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Whether a cart with this id exists under the given store scope.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(
        &self,
        store: &StoreContext,
        cart_id: CartId,
    ) -> Result<bool, RepositoryError> {
        let exists: bool = sqlx::query_scalar(
            r"
            SELECT EXISTS (
                SELECT 1
                FROM storefront.cart
                WHERE id = $1 AND store_id = $2
            )
            ",
        )
        .bind(cart_id)
        .bind(store.store_id())
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }
}

impl CartExistenceChecker for CartRepository<'_> {
    async fn cart_exists(
        &self,
        store: &StoreContext,
        cart_id: CartId,
    ) -> Result<bool, RepositoryError> {
        self.exists(store, cart_id).await
    }
}
