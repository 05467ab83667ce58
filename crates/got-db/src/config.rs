//! Database configuration.
//!
//! Configuration is built in code with [`DbConfig::new`] or loaded from
//! environment variables with fallback to defaults.
//!
//! | Variable                   | Default     | Meaning                        |
//! |----------------------------|-------------|--------------------------------|
//! | `GOT_DB_PATH`              | `./got.db`  | SQLite database file           |
//! | `GOT_DB_BUSY_TIMEOUT_SECS` | `5`         | Lock wait per connection       |
//! | `GOT_DB_COLUMN_ORDER`      | `legacy`    | `legacy` or `declared`         |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default database file when `GOT_DB_PATH` is unset.
pub const DEFAULT_DATABASE_PATH: &str = "./got.db";

// =============================================================================
// Column Order
// =============================================================================

/// How `update` binds values to the `name, city, house` columns.
///
/// ## Legacy Binding
/// ```text
/// UPDATE person SET name = ?1, city = ?2, house = ?3 WHERE id = ?4
///
///   Legacy:    ?1 = name   ?2 = house   ?3 = city    ← city/house swapped
///   Declared:  ?1 = name   ?2 = city    ?3 = house
/// ```
/// Deployed data was written with the legacy binding, so it stays the
/// default until callers opt in to [`ColumnOrder::Declared`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOrder {
    /// Binds (name, house, city): an updated row ends up with city and house swapped.
    #[default]
    Legacy,
    /// Binds (name, city, house) in column order.
    Declared,
}

impl FromStr for ColumnOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ColumnOrder::Legacy),
            "declared" => Ok(ColumnOrder::Declared),
            _ => Err(ConfigError::InvalidValue("GOT_DB_COLUMN_ORDER".to_string())),
        }
    }
}

impl fmt::Display for ColumnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnOrder::Legacy => f.write_str("legacy"),
            ColumnOrder::Declared => f.write_str("declared"),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/got.db")
///     .busy_timeout(Duration::from_secs(2))
///     .column_order(ColumnOrder::Declared);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// How long a connection waits on a locked database.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Value binding used by `update`.
    /// Default: [`ColumnOrder::Legacy`]
    pub column_order: ColumnOrder,

    /// Whether to run migrations on init.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Will be created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            busy_timeout: Duration::from_secs(5),
            column_order: ColumnOrder::default(),
            run_migrations: true,
        }
    }

    /// Sets the busy timeout.
    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets the update binding.
    pub fn column_order(mut self, order: ColumnOrder) -> Self {
        self.column_order = order;
        self
    }

    /// Sets whether to run migrations on init.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_path = lookup("GOT_DB_PATH")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let busy_timeout_secs: u64 = lookup("GOT_DB_BUSY_TIMEOUT_SECS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("GOT_DB_BUSY_TIMEOUT_SECS".to_string()))?;

        let column_order = match lookup("GOT_DB_COLUMN_ORDER") {
            Some(value) => value.parse()?,
            None => ColumnOrder::default(),
        };

        Ok(DbConfig::new(database_path)
            .busy_timeout(Duration::from_secs(busy_timeout_secs))
            .column_order(column_order))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .busy_timeout(Duration::from_secs(1))
            .column_order(ColumnOrder::Declared)
            .run_migrations(false);

        assert_eq!(config.database_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_secs(1));
        assert_eq!(config.column_order, ColumnOrder::Declared);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_defaults_keep_legacy_binding() {
        let config = DbConfig::new("got.db");
        assert_eq!(config.column_order, ColumnOrder::Legacy);
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
        assert!(config.run_migrations);
    }

    #[test]
    fn test_lookup_defaults() {
        let config = DbConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
        assert_eq!(config.column_order, ColumnOrder::Legacy);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = DbConfig::from_lookup(lookup_from(&[
            ("GOT_DB_PATH", "/data/people.db"),
            ("GOT_DB_BUSY_TIMEOUT_SECS", "12"),
            ("GOT_DB_COLUMN_ORDER", "Declared"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/data/people.db"));
        assert_eq!(config.busy_timeout, Duration::from_secs(12));
        assert_eq!(config.column_order, ColumnOrder::Declared);
    }

    #[test]
    fn test_lookup_rejects_bad_values() {
        let err = DbConfig::from_lookup(lookup_from(&[("GOT_DB_BUSY_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GOT_DB_BUSY_TIMEOUT_SECS");

        let err =
            DbConfig::from_lookup(lookup_from(&[("GOT_DB_COLUMN_ORDER", "sideways")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GOT_DB_COLUMN_ORDER");
    }

    #[test]
    fn test_column_order_display_round_trips() {
        for order in [ColumnOrder::Legacy, ColumnOrder::Declared] {
            assert_eq!(order.to_string().parse::<ColumnOrder>().unwrap(), order);
        }
    }
}
