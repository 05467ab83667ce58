//! # Validation Module
//!
//! Field validation for person records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE                                                  │
//! │  └── Column length limits (VARCHAR(255) is not enforced by SQLite)     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── PRIMARY KEY AUTOINCREMENT                                         │
//! │  └── UNIQUE (name, city, house)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use got_core::validation::validate_field;
//!
//! assert!(validate_field("house", "Stark").is_ok());
//! assert!(validate_field("house", &"S".repeat(300)).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_FIELD_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a single string column value.
///
/// ## Rules
/// - At most [`MAX_FIELD_LEN`] characters (counted as chars, not bytes)
/// - Empty strings are accepted; the table declares no NOT NULL constraint
pub fn validate_field(field: &str, value: &str) -> ValidationResult<()> {
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field_accepts_boundary() {
        assert!(validate_field("name", &"a".repeat(MAX_FIELD_LEN)).is_ok());
        assert!(validate_field("name", "").is_ok());
    }

    #[test]
    fn test_validate_field_rejects_too_long() {
        let err = validate_field("city", &"a".repeat(MAX_FIELD_LEN + 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "city".to_string(),
                max: MAX_FIELD_LEN,
            }
        );
    }

    #[test]
    fn test_validate_field_counts_chars_not_bytes() {
        // 255 two-byte characters still fit the column
        assert!(validate_field("name", &"ä".repeat(MAX_FIELD_LEN)).is_ok());
    }
}
