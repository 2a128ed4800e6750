//! Opaque masked cart identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`MaskedId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum MaskedIdError {
    /// The input string is empty.
    #[error("masked id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("masked id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[0-9A-Za-z]`.
    #[error("masked id must be alphanumeric")]
    InvalidCharacter,
}

/// An opaque token substituted for a numeric cart id in external-facing
/// contexts, so sequential internal ids are never exposed.
///
/// ## Constraints
///
/// - Length: 1-32 characters (the `masked_id` column is `VARCHAR(32)`)
/// - ASCII alphanumeric only
///
/// Freshly provisioned tokens are always [`MaskedId::GENERATED_LENGTH`]
/// characters; shorter tokens are accepted on read so historical rows keep
/// resolving.
///
/// ## Examples
///
/// ```
/// use cartmask_core::MaskedId;
///
/// assert!(MaskedId::parse("abc123").is_ok());
/// assert!(MaskedId::parse("").is_err());          // empty
/// assert!(MaskedId::parse("has spaces").is_err()); // not alphanumeric
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MaskedId(String);

impl MaskedId {
    /// Maximum length of a masked id.
    pub const MAX_LENGTH: usize = 32;

    /// Length of newly generated tokens.
    pub const GENERATED_LENGTH: usize = 32;

    /// Parse a `MaskedId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 32 characters
    /// - Contains a non-alphanumeric character
    pub fn parse(s: &str) -> Result<Self, MaskedIdError> {
        if s.is_empty() {
            return Err(MaskedIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(MaskedIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MaskedIdError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `MaskedId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MaskedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MaskedId {
    type Err = MaskedIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for MaskedId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for MaskedId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for MaskedId {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for MaskedId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tokens() {
        assert!(MaskedId::parse("abc123").is_ok());
        assert!(MaskedId::parse("A").is_ok());
        assert!(MaskedId::parse(&"a".repeat(32)).is_ok());
        assert!(MaskedId::parse("0VbMydxSuKmIno5pBqCzW3lEGwTgReYf").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(MaskedId::parse(""), Err(MaskedIdError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            MaskedId::parse(&"a".repeat(33)),
            Err(MaskedIdError::TooLong { max: 32 })
        ));
    }

    #[test]
    fn test_parse_rejects_non_alphanumeric() {
        assert!(matches!(
            MaskedId::parse("abc-123"),
            Err(MaskedIdError::InvalidCharacter)
        ));
        assert!(matches!(
            MaskedId::parse("abc 123"),
            Err(MaskedIdError::InvalidCharacter)
        ));
        assert!(matches!(
            MaskedId::parse("ábc123"),
            Err(MaskedIdError::InvalidCharacter)
        ));
    }

    #[test]
    fn test_display() {
        let masked = MaskedId::parse("abc123").unwrap();
        assert_eq!(format!("{masked}"), "abc123");
    }

    #[test]
    fn test_from_str() {
        let masked: MaskedId = "abc123".parse().unwrap();
        assert_eq!(masked.as_str(), "abc123");
    }

    #[test]
    fn test_serde_roundtrip() {
        let masked = MaskedId::parse("abc123").unwrap();
        let json = serde_json::to_string(&masked).unwrap();
        assert_eq!(json, "\"abc123\"");

        let parsed: MaskedId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, masked);
    }

    #[test]
    fn test_into_inner() {
        let masked = MaskedId::parse("abc123").unwrap();
        assert_eq!(masked.into_inner(), "abc123");
    }
}
