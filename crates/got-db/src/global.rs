//! # Process-Wide Database
//!
//! Explicit lifecycle for the one database handle a process shares.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Lifecycle                                       │
//! │                                                                         │
//! │   instance() ──► Err(NotInitialized)                                   │
//! │        │                                                                │
//! │   init(config) ──► Database::new: options + migrations (once)          │
//! │        │                                                                │
//! │   init(other) ──► returns the stored handle, schema untouched          │
//! │        │                                                                │
//! │   instance() / repository() ──► stored handle                          │
//! │        │                                                                │
//! │   teardown() ──► slot cleared, back to the top                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The slot sits behind an async mutex, so concurrent first calls to
//! [`init`] are serialized and at most one handle is ever stored.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::DbConfig;
use crate::database::Database;
use crate::error::{DbError, DbResult};
use crate::repository::LenientRepository;

static DATABASE: Mutex<Option<Database>> = Mutex::const_new(None);

/// Initializes the process-wide database, bootstrapping the schema once.
///
/// Later calls return the stored handle and ignore `config`.
pub async fn init(config: DbConfig) -> DbResult<Database> {
    let mut slot = DATABASE.lock().await;

    if let Some(db) = slot.as_ref() {
        if db.config().database_path != config.database_path {
            warn!(
                active = %db.config().database_path.display(),
                requested = %config.database_path.display(),
                "Database already initialized; keeping the active one"
            );
        }
        return Ok(db.clone());
    }

    let db = Database::new(config).await?;
    info!(path = %db.config().database_path.display(), "Process database initialized");
    *slot = Some(db.clone());
    Ok(db)
}

/// Returns the process-wide database.
pub async fn instance() -> DbResult<Database> {
    DATABASE.lock().await.clone().ok_or(DbError::NotInitialized)
}

/// Returns the lenient repository over the process-wide database.
pub async fn repository() -> DbResult<LenientRepository> {
    Ok(instance().await?.repository())
}

/// Drops the process-wide database.
///
/// Returns whether a handle was stored.
pub async fn teardown() -> bool {
    let previous = DATABASE.lock().await.take();
    if previous.is_some() {
        info!("Process database torn down");
    }
    previous.is_some()
}
