//! Cart identifier masking.
//!
//! External-facing surfaces (guest checkout APIs in particular) must never
//! expose the sequential numeric ids the cart tables use internally. This
//! crate maps a numeric [`CartId`](cartmask_core::CartId) to an opaque masked
//! token and back:
//!
//! - [`MaskedIdResolver`] - numeric cart id to masked token, after verifying
//!   the cart exists in the caller's store scope
//! - [`CartIdResolver`] - masked token back to the numeric cart id
//!
//! Both resolvers are read-only and talk to storage through constructor-passed
//! collaborator traits ([`CartExistenceChecker`], [`MaskLookup`]). Postgres
//! implementations of those traits live in [`db`], along with the lazy
//! mask-provisioning write path ([`db::MaskRepository::ensure_mask`]).
//!
//! # Modules
//!
//! - [`resolver`] - Resolver entry points and collaborator traits
//! - [`db`] - sqlx-backed repositories and pool setup
//! - [`mask`] - Token generation
//! - [`store`] - Explicit store (tenant) scoping
//! - [`error`] - Error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod db;
pub mod error;
pub mod mask;
pub mod resolver;
pub mod store;

pub use error::ResolveError;
pub use resolver::{
    CartExistenceChecker, CartIdResolver, MaskLookup, MaskRecord, MaskedIdResolver,
};
pub use store::StoreContext;
