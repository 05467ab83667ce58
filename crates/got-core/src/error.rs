//! # Error Types
//!
//! Domain-specific error types for got-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  got-core errors (this file)                                           │
//! │  └── ValidationError  - Field validation failures                      │
//! │                                                                         │
//! │  got-db errors (separate crate)                                        │
//! │  └── DbError          - Store execution failures                       │
//! │                                                                         │
//! │  Flow: ValidationError → DbError::Validation → caller policy           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field value is too long for its column.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}
