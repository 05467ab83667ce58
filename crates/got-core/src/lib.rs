//! # got-core: Pure Domain Types for the Person Registry
//!
//! This crate holds the domain record and its rules with zero I/O
//! dependencies. Persistence lives in `got-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Person Registry Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Callers (seed binary, front ends)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 got-db (Persistence Layer)                      │   │
//! │  │        Repository trait, PersonRepository, migrations           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ got-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌─────────────┐   ┌───────────┐              │   │
//! │  │   │   types   │   │ validation  │   │   error   │              │   │
//! │  │   │  Person   │   │ field rules │   │ Validation│              │   │
//! │  │   │ PersonId  │   │  (255 max)  │   │   Error   │              │   │
//! │  │   └───────────┘   └─────────────┘   └───────────┘              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Person, PersonId)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use got_core::Person;
//!
//! let person = Person::new("Alice", "Linz", "A1");
//! assert!(person.id.is_none());
//! assert!(person.validate().is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the table backing [`Person`] records.
pub const TABLE_NAME: &str = "person";

/// Maximum length of `name`, `city` and `house`.
///
/// Mirrors the `VARCHAR(255)` column declarations. SQLite does not enforce
/// declared lengths, so write paths check it through [`validation`].
pub const MAX_FIELD_LEN: usize = 255;
