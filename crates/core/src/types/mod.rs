//! Core types for the cart masking library.
//!
//! This module provides type-safe wrappers for the identifiers the resolvers
//! pass around.

pub mod id;
pub mod mask;

pub use id::*;
pub use mask::{MaskedId, MaskedIdError};
