//! Short code generation and alias validation.
//!
//! Generation draws from the thread-local CSPRNG; collision handling is left
//! to the store's uniqueness constraint rather than retrying here.

use crate::error::AppError;
use rand::{distr::Alphanumeric, Rng};
use serde_json::json;

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 8;

/// Minimum length of a caller-supplied alias.
pub const ALIAS_MIN_LENGTH: usize = 4;

/// Maximum length of a caller-supplied alias (also the column width).
pub const ALIAS_MAX_LENGTH: usize = 20;

/// Generates a random 8-character alphanumeric short code.
///
/// A single attempt is made; the probability of colliding with an existing
/// code is low enough that conflicts are simply surfaced by the store
/// constraint. Bounded retry is a possible extension at the service layer.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.bytes().all(|b| b.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied alias.
///
/// Checks run in a fixed order - character set, then minimum length, then
/// maximum length - and the first failure's message is returned. Callers
/// rely on this ordering for deterministic error text.
///
/// # Errors
///
/// Returns [`AppError::InvalidAlias`] with one of:
///
/// - `"Alias must be alphanumeric"`
/// - `"Alias must be at least 4 characters"`
/// - `"Alias must be no more than 20 characters"`
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || !alias.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(AppError::invalid_alias(
            "Alias must be alphanumeric",
            json!({ "alias": alias }),
        ));
    }

    if alias.len() < ALIAS_MIN_LENGTH {
        return Err(AppError::invalid_alias(
            format!("Alias must be at least {ALIAS_MIN_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if alias.len() > ALIAS_MAX_LENGTH {
        return Err(AppError::invalid_alias(
            format!("Alias must be no more than {ALIAS_MAX_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        let code = generate_code();
        assert!(code.bytes().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_accepts_minimum_length() {
        assert!(validate_alias("abcd").is_ok());
    }

    #[test]
    fn test_validate_accepts_maximum_length() {
        assert!(validate_alias(&"a".repeat(20)).is_ok());
    }

    #[test]
    fn test_validate_accepts_mixed_case_and_digits() {
        assert!(validate_alias("MyAlias2024").is_ok());
        assert!(validate_alias("1234").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_alias("abc").unwrap_err();
        assert_eq!(err.to_string(), "Alias must be at least 4 characters");
    }

    #[test]
    fn test_validate_too_long() {
        let err = validate_alias(&"a".repeat(21)).unwrap_err();
        assert_eq!(err.to_string(), "Alias must be no more than 20 characters");
    }

    #[test]
    fn test_validate_rejects_non_alphanumeric() {
        let err = validate_alias("invalid alias!").unwrap_err();
        assert_eq!(err.to_string(), "Alias must be alphanumeric");
    }

    #[test]
    fn test_validate_character_set_checked_before_length() {
        // "ab!" fails both checks; the character-set message wins.
        let err = validate_alias("ab!").unwrap_err();
        assert_eq!(err.to_string(), "Alias must be alphanumeric");
    }

    #[test]
    fn test_validate_empty_string_fails_character_set() {
        let err = validate_alias("").unwrap_err();
        assert_eq!(err.to_string(), "Alias must be alphanumeric");
    }

    #[test]
    fn test_validate_rejects_unicode() {
        assert!(validate_alias("промо").is_err());
    }
}
