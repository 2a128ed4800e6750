//! Cartmask Core - Shared identifier types.
//!
//! This crate provides the identifier types used across the cart masking
//! library:
//! - numeric entity IDs ([`CartId`], [`StoreId`])
//! - the opaque [`MaskedId`] token that stands in for a cart id in
//!   external-facing contexts
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. Postgres
//! column codecs are available behind the `postgres` feature so repositories
//! can bind these types directly without unwrapping them first.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and mask tokens

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
