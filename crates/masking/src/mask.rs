//! Masked id token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

use cartmask_core::MaskedId;

/// Generate a fresh masked id token.
///
/// Tokens are 32 alphanumeric characters drawn from the thread-local CSPRNG.
/// Uniqueness is enforced by the database, not here; at 62^32 possibilities a
/// collision surfaces as a unique-constraint violation on insert.
#[must_use]
pub fn generate() -> MaskedId {
    generate_with(&mut rand::rng())
}

/// Generate a fresh masked id token from the given RNG.
///
/// Split out from [`generate`] so tests can pass a seeded RNG.
#[must_use]
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> MaskedId {
    let token: String = rng
        .sample_iter(Alphanumeric)
        .take(MaskedId::GENERATED_LENGTH)
        .map(char::from)
        .collect();

    MaskedId::parse(&token).expect("alphanumeric tokens of generated length always parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_full_length() {
        let token = generate();
        assert_eq!(token.as_str().len(), MaskedId::GENERATED_LENGTH);
    }

    #[test]
    fn test_generated_tokens_are_alphanumeric() {
        let token = generate();
        assert!(token.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_tokens_differ() {
        assert_ne!(generate(), generate());
    }
}
