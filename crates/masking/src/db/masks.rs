//! Mask table repository.

use sqlx::PgPool;

use cartmask_core::{CartId, MaskedId};

use super::RepositoryError;
use crate::mask;
use crate::resolver::{MaskLookup, MaskRecord};

fn parse_stored_token(s: &str) -> Result<MaskedId, RepositoryError> {
    MaskedId::parse(s)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid masked id in database: {e}")))
}

/// Repository for the `cart_id_mask` table.
pub struct MaskRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MaskRepository<'a> {
    /// Create a new mask repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load the mask record keyed by cart id, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored token is invalid.
    pub async fn get_by_cart_id(
        &self,
        cart_id: CartId,
    ) -> Result<Option<MaskRecord>, RepositoryError> {
        let row: Option<(i32, Option<String>)> = sqlx::query_as(
            r"
            SELECT cart_id, masked_id
            FROM storefront.cart_id_mask
            WHERE cart_id = $1
            ",
        )
        .bind(cart_id)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some((cart_id, stored)) => {
                let masked_id = stored.as_deref().map(parse_stored_token).transpose()?;

                Ok(Some(MaskRecord {
                    cart_id: CartId::new(cart_id),
                    masked_id,
                }))
            }
            None => Ok(None),
        }
    }

    /// Look up the cart id a token was issued for, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_cart_id(
        &self,
        masked_id: &MaskedId,
    ) -> Result<Option<CartId>, RepositoryError> {
        let cart_id: Option<i32> = sqlx::query_scalar(
            r"
            SELECT cart_id
            FROM storefront.cart_id_mask
            WHERE masked_id = $1
            ",
        )
        .bind(masked_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cart_id.map(CartId::new))
    }

    /// Lazily provision a mask for a cart, returning the token on record.
    ///
    /// First call for a cart inserts a fresh 32-character token. Concurrent
    /// callers race the insert; whoever loses reads the winner's token back,
    /// so every caller converges on the same value. Rows that predate
    /// provisioning (null token) are backfilled in place.
    ///
    /// This is the write path [`resolve`](crate::MaskedIdResolver::resolve)
    /// deliberately does not take.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the cart's mask row vanished
    /// mid-flight (the owning cart was deleted and cascaded it away).
    /// Returns `RepositoryError::Conflict` if the generated token collided
    /// with an existing one.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn ensure_mask(&self, cart_id: CartId) -> Result<MaskedId, RepositoryError> {
        let token = mask::generate();

        sqlx::query(
            r"
            INSERT INTO storefront.cart_id_mask (cart_id, masked_id)
            VALUES ($1, $2)
            ON CONFLICT (cart_id) DO NOTHING
            ",
        )
        .bind(cart_id)
        .bind(&token)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("masked id already in use".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        let stored: Option<Option<String>> = sqlx::query_scalar(
            r"
            SELECT masked_id
            FROM storefront.cart_id_mask
            WHERE cart_id = $1
            ",
        )
        .bind(cart_id)
        .fetch_optional(self.pool)
        .await?;

        match stored {
            None => Err(RepositoryError::NotFound),
            Some(Some(s)) => parse_stored_token(&s),
            Some(None) => self.backfill(cart_id, &token).await,
        }
    }

    /// Fill in the token for a pre-existing row with a null `masked_id`.
    async fn backfill(&self, cart_id: CartId, token: &MaskedId) -> Result<MaskedId, RepositoryError> {
        sqlx::query(
            r"
            UPDATE storefront.cart_id_mask
            SET masked_id = $2
            WHERE cart_id = $1 AND masked_id IS NULL
            ",
        )
        .bind(cart_id)
        .bind(token)
        .execute(self.pool)
        .await?;

        // Re-read rather than trust our own update: a concurrent backfill may
        // have won the `masked_id IS NULL` guard.
        let stored: Option<String> = sqlx::query_scalar(
            r"
            SELECT masked_id
            FROM storefront.cart_id_mask
            WHERE cart_id = $1
            ",
        )
        .bind(cart_id)
        .fetch_one(self.pool)
        .await?;

        match stored {
            Some(s) => parse_stored_token(&s),
            None => Err(RepositoryError::DataCorruption(format!(
                "mask row for cart {cart_id} lost its token during backfill"
            ))),
        }
    }
}

impl MaskLookup for MaskRepository<'_> {
    async fn mask_for_cart(&self, cart_id: CartId) -> Result<Option<MaskRecord>, RepositoryError> {
        self.get_by_cart_id(cart_id).await
    }

    async fn cart_for_mask(&self, masked_id: &MaskedId) -> Result<Option<CartId>, RepositoryError> {
        self.get_cart_id(masked_id).await
    }
}
