//! Resolver entry points and their collaborator seams.
//!
//! The resolvers own no storage. They are handed their collaborators at
//! construction and perform reads only; provisioning a mask for a cart that
//! has none is a separate write path (see
//! [`MaskRepository::ensure_mask`](crate::db::MaskRepository::ensure_mask))
//! that callers invoke explicitly.

use tracing::instrument;

use cartmask_core::{CartId, MaskedId};

use crate::db::RepositoryError;
use crate::error::ResolveError;
use crate::store::StoreContext;

/// A mask row as stored: a cart id paired with its (nullable) token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskRecord {
    /// The cart this mask belongs to.
    pub cart_id: CartId,
    /// The opaque token, if one has been provisioned.
    pub masked_id: Option<MaskedId>,
}

/// Lightweight cart existence probe.
///
/// Deliberately a boolean check rather than a cart loader: the resolvers only
/// need to know the cart is visible in the given store scope, and loading the
/// full cart aggregate (items, addresses, totals) for that would be wasted
/// work on a hot path.
pub trait CartExistenceChecker {
    /// Whether a cart with this id exists under the given store scope.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the underlying lookup fails.
    async fn cart_exists(
        &self,
        store: &StoreContext,
        cart_id: CartId,
    ) -> Result<bool, RepositoryError>;
}

/// Read access to the cart id / masked id mapping.
pub trait MaskLookup {
    /// Load the mask record keyed by cart id, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the underlying lookup fails.
    async fn mask_for_cart(&self, cart_id: CartId) -> Result<Option<MaskRecord>, RepositoryError>;

    /// Look up the cart id a token maps to, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the underlying lookup fails.
    async fn cart_for_mask(&self, masked_id: &MaskedId) -> Result<Option<CartId>, RepositoryError>;
}

/// Resolves a numeric cart id to its masked token.
#[derive(Debug)]
pub struct MaskedIdResolver<C, M> {
    carts: C,
    masks: M,
}

impl<C, M> MaskedIdResolver<C, M>
where
    C: CartExistenceChecker,
    M: MaskLookup,
{
    /// Create a resolver over the given collaborators.
    #[must_use]
    pub const fn new(carts: C, masks: M) -> Self {
        Self { carts, masks }
    }

    /// Resolve a cart id to its masked token.
    ///
    /// Returns the empty string for a cart that exists but has no token yet.
    /// That mirrors the long-standing platform behavior; callers that want a
    /// token provisioned must go through
    /// [`ensure_mask`](crate::db::MaskRepository::ensure_mask) - this method
    /// never writes.
    ///
    /// The existence check and the mask lookup are two reads with no
    /// transaction between them. A cart deleted in that window cascades its
    /// mask row away, and the second read simply finds nothing - callers see
    /// the same empty string as the no-mask case.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] (field `cartId`) if no cart with
    /// this id is visible under `store`. Storage failures propagate as
    /// [`ResolveError::Repository`].
    #[instrument(skip(self, store), level = "debug", fields(store_id = %store.store_id()))]
    pub async fn resolve(
        &self,
        store: &StoreContext,
        cart_id: CartId,
    ) -> Result<String, ResolveError> {
        if !self.carts.cart_exists(store, cart_id).await? {
            return Err(ResolveError::not_found("cartId", cart_id));
        }

        let record = self.masks.mask_for_cart(cart_id).await?;
        match record.and_then(|r| r.masked_id) {
            Some(masked) => Ok(masked.into_inner()),
            None => {
                // Suspected latent defect upstream: an existing cart with no
                // token resolves to "" instead of failing or provisioning.
                // Kept for compatibility; logged so it is visible in traces.
                tracing::debug!(%cart_id, "cart has no masked id, returning empty string");
                Ok(String::new())
            }
        }
    }
}

/// Resolves a masked token back to its numeric cart id.
///
/// Tokens are globally unique, so no store scoping applies here.
#[derive(Debug)]
pub struct CartIdResolver<M> {
    masks: M,
}

impl<M> CartIdResolver<M>
where
    M: MaskLookup,
{
    /// Create a resolver over the given mask lookup.
    #[must_use]
    pub const fn new(masks: M) -> Self {
        Self { masks }
    }

    /// Resolve a masked token to the cart id it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] (field `maskedId`) if the token is
    /// unknown. Storage failures propagate as [`ResolveError::Repository`].
    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, masked_id: &MaskedId) -> Result<CartId, ResolveError> {
        self.masks
            .cart_for_mask(masked_id)
            .await?
            .ok_or_else(|| ResolveError::not_found("maskedId", masked_id))
    }
}
