//! # Domain Types
//!
//! The person record shared by every layer.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Person Lifecycle                                │
//! │                                                                         │
//! │  Person::new("Alice", "Linz", "A1")     id = None   (in memory only)   │
//! │       │                                                                 │
//! │       ▼  save → insert                                                  │
//! │  Person { id: Some(1), .. }             id assigned by the store       │
//! │       │                                                                 │
//! │       ▼  save → update                                                  │
//! │  Person { id: Some(1), .. }             id never changes afterwards    │
//! │                                                                         │
//! │  Business key: (name, city, house) is UNIQUE in the table.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::validation::{validate_field, ValidationResult};

/// Store-assigned identifier of a persisted [`Person`].
pub type PersonId = i64;

// =============================================================================
// Person
// =============================================================================

/// A person living in a city and sworn to a house.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Person {
    /// `None` until the store assigns an identifier on insert.
    pub id: Option<PersonId>,

    /// Display name.
    pub name: String,

    /// City of residence.
    pub city: String,

    /// House the person belongs to.
    pub house: String,
}

impl Person {
    /// Creates a not-yet-persisted person.
    pub fn new(name: impl Into<String>, city: impl Into<String>, house: impl Into<String>) -> Self {
        Person {
            id: None,
            name: name.into(),
            city: city.into(),
            house: house.into(),
        }
    }

    /// Returns a copy carrying the given identifier.
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns true once the store has assigned an id.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks every string field against the column limits.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_field("name", &self.name)?;
        validate_field("city", &self.city)?;
        validate_field("house", &self.house)?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
