//! # got-db: Persistence Layer for the Person Registry
//!
//! This crate stores [`got_core::Person`] records in a single SQLite table,
//! opening one connection per operation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Person Registry Data Flow                        │
//! │                                                                         │
//! │  Caller (seed binary, front end)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     got-db (THIS CRATE)                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │    global     │    │  Repositories  │    │  Migrations  │  │   │
//! │  │   │ init/teardown │    │ Lenient (trait)│    │  (embedded)  │  │   │
//! │  │   │               │    │ Person (strict)│    │              │  │   │
//! │  │   │   Database    │◄───│                │    │ 001_create_  │  │   │
//! │  │   │ (database.rs) │    │                │    │  person.sql  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 SQLite Database (GOT_DB_PATH)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Database configuration (builder + environment)
//! - [`database`] - Connection parameters and per-operation connections
//! - [`global`] - Process-wide init / instance / teardown
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`outcome`] - Success / NotFound / Failure results
//! - [`repository`] - Repository contract and implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use got_db::{global, DbConfig, Repository};
//! use got_core::Person;
//!
//! global::init(DbConfig::from_env()?).await?;
//! let repo = global::repository().await?;
//!
//! let alice = repo.save(Person::new("Alice", "Linz", "A1")).await;
//! let same = repo.find(alice.id.unwrap()).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod database;
pub mod error;
pub mod global;
pub mod migrations;
pub mod outcome;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ColumnOrder, ConfigError, DbConfig};
pub use database::Database;
pub use error::{DbError, DbResult};
pub use outcome::Outcome;

// Repository re-exports for convenience
pub use repository::{LenientRepository, PersonRepository, Repository};
