//! # Database Handle
//!
//! Connection parameters and per-operation connection acquisition.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Per-Operation Connections                          │
//! │                                                                         │
//! │  Startup                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Configure file, busy timeout, column order      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Build options + run migrations          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repository.find(1)                                                    │
//! │       │                                                                 │
//! │       ├── acquire()  ──► fresh SqliteConnection                        │
//! │       ├── execute one statement                                        │
//! │       └── scope ends ──► connection dropped and closed                 │
//! │                          (on success AND on every `?` early return)    │
//! │                                                                         │
//! │  No pool: nothing is shared between operations.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! Each connection enables WAL so a reader on one connection does not block
//! a writer on another.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{Connection, SqliteConnection};
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::lenient::LenientRepository;
use crate::repository::person::PersonRepository;

/// Handle holding everything needed to open a connection.
///
/// Cloning is cheap; the handle owns no open connection.
#[derive(Debug, Clone)]
pub struct Database {
    config: DbConfig,
    options: SqliteConnectOptions,
}

impl Database {
    /// Creates a database handle and, when enabled, bootstraps the schema.
    ///
    /// ## What This Does
    /// 1. Builds connection options (create file if missing, WAL, busy timeout)
    /// 2. Runs migrations (if enabled), which opens the first connection
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use handle
    /// * `Err(DbError)` - Connection or migration failed
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        let db = Database::open(config);

        if db.config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Builds a handle without touching the file system.
    ///
    /// Connection problems surface on the first [`Database::acquire`].
    pub fn open(config: DbConfig) -> Self {
        info!(
            path = %config.database_path.display(),
            column_order = %config.column_order,
            "Configuring database"
        );

        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(config.busy_timeout);

        Database { config, options }
    }

    /// Opens a new connection scoped to the caller.
    ///
    /// Callers close the connection once their statement succeeded; on an
    /// error path it is dropped, which closes it as well.
    pub async fn acquire(&self) -> DbResult<SqliteConnection> {
        debug!(path = %self.config.database_path.display(), "Opening connection");

        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))
    }

    /// Runs database migrations.
    ///
    /// ## What This Does
    /// - Applies all pending migrations in order
    /// - Tracks applied migrations in `_sqlx_migrations` table
    /// - Idempotent: safe to run multiple times
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        let mut conn = self.acquire().await?;
        migrations::run_migrations(&mut conn).await?;
        conn.close().await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns the configuration this handle was built from.
    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Returns the strict person repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let found = db.persons().find(1).await;
    /// ```
    pub fn persons(&self) -> PersonRepository {
        PersonRepository::new(self.clone())
    }

    /// Returns the log-and-degrade repository over [`Database::persons`].
    pub fn repository(&self) -> LenientRepository {
        LenientRepository::new(self.persons())
    }

    /// Checks if the database is healthy (can execute queries).
    ///
    /// ## Returns
    /// * `true` - Database is responsive
    /// * `false` - Database is unavailable
    pub async fn health_check(&self) -> bool {
        let Ok(mut conn) = self.acquire().await else {
            return false;
        };

        if sqlx::query("SELECT 1").execute(&mut conn).await.is_err() {
            return false;
        }
        conn.close().await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
