//! Store (tenant) scoping for identifier lookups.

use cartmask_core::StoreId;

/// The store scope a lookup runs under.
///
/// The surrounding platform resolves the current storefront per request; the
/// resolvers take it as an explicit value instead of reading ambient state, so
/// they stay pure and testable. A cart that only exists under a different
/// store id is treated as not found - tenant isolation, not an error in the
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreContext {
    store_id: StoreId,
}

impl StoreContext {
    /// Create a store context for the given store id.
    #[must_use]
    pub const fn new(store_id: StoreId) -> Self {
        Self { store_id }
    }

    /// The store id lookups are constrained to.
    #[must_use]
    pub const fn store_id(&self) -> StoreId {
        self.store_id
    }
}
