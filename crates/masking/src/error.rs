//! Error taxonomy for the identifier resolvers.
//!
//! Callers need exactly one distinction: "the id you sent references nothing"
//! versus "storage fell over". The first maps to a 404-style response in the
//! API layer; the second must propagate unmodified and never be swallowed.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors returned by the identifier resolvers.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The referenced entity does not exist in the caller's scope.
    ///
    /// Carries the offending field name (`cartId` or `maskedId`) and value so
    /// the API layer can echo them back to the client.
    #[error("no such entity with {field} = {value}")]
    NotFound {
        /// Name of the input field that failed to resolve.
        field: &'static str,
        /// The value the caller sent.
        value: String,
    },

    /// Storage failure, propagated unmodified from the repository layer.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ResolveError {
    /// Build a `NotFound` for a single offending field.
    pub(crate) fn not_found(field: &'static str, value: impl std::fmt::Display) -> Self {
        Self::NotFound {
            field,
            value: value.to_string(),
        }
    }
}
