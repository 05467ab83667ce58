//! # Repository Module
//!
//! Person repositories: a strict data layer and the lenient public contract.
//!
//! ## Two Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layers                                    │
//! │                                                                         │
//! │  Caller                                                                │
//! │       │  repo.find(1) -> Option<Person>                                │
//! │       ▼                                                                 │
//! │  LenientRepository  (impl Repository)                                  │
//! │  └── policy: log every DbError, return a default value                 │
//! │       │                                                                 │
//! │       │  persons.find(1) -> Outcome<Person>                            │
//! │       ▼                                                                 │
//! │  PersonRepository   (strict)                                           │
//! │  ├── save / delete / delete_all      → DbResult<_>                     │
//! │  └── find                            → Outcome<Person>                 │
//! │       │                                                                 │
//! │       │  one SqliteConnection per call                                 │
//! │       ▼                                                                 │
//! │  SQLite person table                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PersonRepository`] - Strict CRUD with explicit errors
//! - [`LenientRepository`] - [`Repository`] implementation that never fails

pub mod lenient;
pub mod person;

pub use lenient::LenientRepository;
pub use person::PersonRepository;

use async_trait::async_trait;
use got_core::{Person, PersonId};

/// Public person storage contract.
///
/// Implementations never surface errors: failures degrade to the input
/// person, `None`, or an empty list.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Updates the person when it carries an id, otherwise inserts it.
    ///
    /// Returns the person with its (possibly new) id.
    async fn save(&self, person: Person) -> Person;

    /// Removes the person with the given id, if any.
    async fn delete(&self, id: PersonId);

    /// Removes every person.
    async fn delete_all(&self);

    /// Looks a person up by id.
    async fn find(&self, id: PersonId) -> Option<Person>;

    /// Lists every person of the given house.
    async fn find_by_house(&self, house: &str) -> Vec<Person>;
}
