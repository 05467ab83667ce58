//! # Person Repository
//!
//! Database operations for persons, with explicit results.
//!
//! ## Key Operations
//! - `save` (update by id, falling back to insert)
//! - Lookup by id and by house
//! - Delete by id and delete everything
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         save(person)                                    │
//! │                                                                         │
//! │  person.id?                                                            │
//! │     │                                                                   │
//! │     ├── None ─────────────────────────────► insert ──► Person{id: new} │
//! │     │                                                                   │
//! │     └── Some(id) ──► update                                            │
//! │                        │                                                │
//! │                        ├── Success(1) ─────────────► input unchanged   │
//! │                        │                                                │
//! │                        └── NotFound / Failure                          │
//! │                               │  warn!                                  │
//! │                               ▼                                         │
//! │                            insert ──► Person{id: new}                  │
//! │                                                                         │
//! │  The fallback can hand back a DIFFERENT id than the caller passed:     │
//! │  a stale id becomes a fresh row.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{Connection, SqliteConnection};
use tracing::{debug, warn};

use crate::config::ColumnOrder;
use crate::database::Database;
use crate::error::{DbError, DbResult};
use crate::outcome::Outcome;
use got_core::{Person, PersonId, TABLE_NAME};

/// Repository for person database operations.
///
/// Every method opens its own connection through [`Database::acquire`] and
/// closes it before returning a result; nothing is cached between calls.
/// Error paths drop the connection instead.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.persons();
///
/// let saved = repo.save(Person::new("Alice", "Linz", "A1")).await?;
/// let found = repo.find(saved.id.unwrap()).await;
/// ```
#[derive(Debug, Clone)]
pub struct PersonRepository {
    db: Database,
}

impl PersonRepository {
    /// Creates a new PersonRepository.
    pub fn new(db: Database) -> Self {
        PersonRepository { db }
    }

    /// Persists a person: update when it carries an id, insert otherwise.
    ///
    /// ## Returns
    /// * `Ok(Person)` - the input unchanged after an update, or the input
    ///   with a newly assigned id after an insert
    /// * `Err(DbError)` - the insert (direct or fallback) failed
    pub async fn save(&self, person: Person) -> DbResult<Person> {
        if let Some(id) = person.id {
            match self.update(&person).await {
                Outcome::Success(_) => return Ok(person),
                Outcome::NotFound => {
                    warn!(id = %id, "Could not update person: no row matched, inserting instead");
                }
                Outcome::Failure(err) => {
                    warn!(id = %id, error = %err, "Could not update person, inserting instead");
                }
            }
        }

        self.insert(person).await
    }

    /// Inserts a new row and returns the person with the generated id.
    ///
    /// Any id already on `person` is ignored by the statement and replaced.
    async fn insert(&self, mut person: Person) -> DbResult<Person> {
        person.validate()?;

        debug!(name = %person.name, house = %person.house, "Inserting person");

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(&format!(
            "INSERT INTO {TABLE_NAME} (name, city, house) VALUES (?1, ?2, ?3)"
        ))
        .bind(&person.name)
        .bind(&person.city)
        .bind(&person.house)
        .execute(&mut conn)
        .await?;
        conn.close().await?;

        if result.rows_affected() == 0 {
            return Err(DbError::QueryFailed(
                "Creating person failed, no rows affected".to_string(),
            ));
        }

        person.id = Some(result.last_insert_rowid());
        Ok(person)
    }

    /// Updates the row matching `person.id`.
    ///
    /// ## Returns
    /// * `Success(1)` - exactly one row updated
    /// * `NotFound` - no row has this id, or the person has no id
    /// * `Failure` - validation or SQL error, or more than one row touched
    ///
    /// The value binding follows [`ColumnOrder`]; with the legacy binding the
    /// stored city and house come out swapped.
    async fn update(&self, person: &Person) -> Outcome<u64> {
        let Some(id) = person.id else {
            return Outcome::NotFound;
        };

        match self.update_rows(id, person).await {
            Ok(0) => Outcome::NotFound,
            Ok(1) => Outcome::Success(1),
            Ok(rows) => Outcome::Failure(DbError::QueryFailed(format!(
                "Updating person {id} touched {rows} rows"
            ))),
            Err(err) => Outcome::Failure(err),
        }
    }

    async fn update_rows(&self, id: PersonId, person: &Person) -> DbResult<u64> {
        person.validate()?;

        let order = self.db.config().column_order;
        debug!(id = %id, column_order = %order, "Updating person");

        let (second, third) = match order {
            ColumnOrder::Legacy => (&person.house, &person.city),
            ColumnOrder::Declared => (&person.city, &person.house),
        };

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(&format!(
            "UPDATE {TABLE_NAME} SET name = ?1, city = ?2, house = ?3 WHERE id = ?4"
        ))
        .bind(&person.name)
        .bind(second)
        .bind(third)
        .bind(id)
        .execute(&mut conn)
        .await?;
        conn.close().await?;

        Ok(result.rows_affected())
    }

    /// Deletes the person with the given id.
    ///
    /// ## Returns
    /// Number of deleted rows (0 when the id was unknown).
    pub async fn delete(&self, id: PersonId) -> DbResult<u64> {
        debug!(id = %id, "Deleting person");

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(&format!("DELETE FROM {TABLE_NAME} WHERE id = ?1"))
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        Ok(result.rows_affected())
    }

    /// Deletes every person.
    ///
    /// ## Returns
    /// Number of deleted rows.
    pub async fn delete_all(&self) -> DbResult<u64> {
        debug!("Deleting all persons");

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(&format!("DELETE FROM {TABLE_NAME}"))
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        Ok(result.rows_affected())
    }

    /// Gets a person by id.
    ///
    /// ## Returns
    /// * `Success(Person)` - row found
    /// * `NotFound` - no row has this id
    /// * `Failure` - the store could not answer
    pub async fn find(&self, id: PersonId) -> Outcome<Person> {
        self.find_row(id).await.into()
    }

    async fn find_row(&self, id: PersonId) -> DbResult<Option<Person>> {
        let mut conn = self.db.acquire().await?;
        let person = sqlx::query_as::<_, Person>(&format!(
            "SELECT id, name, city, house FROM {TABLE_NAME} WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&mut conn)
        .await?;
        conn.close().await?;

        Ok(person)
    }

    /// Lists every person of a house, in id order.
    pub async fn find_by_house(&self, house: &str) -> DbResult<Vec<Person>> {
        let mut conn = self.db.acquire().await?;
        let persons = sqlx::query_as::<_, Person>(&format!(
            "SELECT id, name, city, house FROM {TABLE_NAME} WHERE house = ?1 ORDER BY id"
        ))
        .bind(house)
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;

        debug!(house = %house, count = persons.len(), "Loaded persons of house");
        Ok(persons)
    }

    /// Counts stored persons (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let mut conn = self.db.acquire().await?;
        let count = count_rows(&mut conn).await?;
        conn.close().await?;

        Ok(count)
    }
}

async fn count_rows(conn: &mut SqliteConnection) -> DbResult<i64> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {TABLE_NAME}"))
        .fetch_one(conn)
        .await?;

    Ok(count)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use tempfile::TempDir;

    async fn setup(order: ColumnOrder) -> (TempDir, PersonRepository) {
        let dir = tempfile::tempdir().unwrap();
        let config = DbConfig::new(dir.path().join("got.db")).column_order(order);
        let db = Database::new(config).await.unwrap();
        (dir, db.persons())
    }

    #[tokio::test]
    async fn test_first_save_gets_id_one() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;

        let saved = repo.save(Person::new("Alice", "Linz", "A1")).await.unwrap();
        assert_eq!(saved.id, Some(1));

        let found = repo.find(1).await.success().unwrap();
        assert_eq!(found, Person::new("Alice", "Linz", "A1").with_id(1));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;

        let first = repo.save(Person::new("Jon", "Winterfell", "Stark")).await.unwrap();
        let second = repo.save(Person::new("Arya", "Winterfell", "Stark")).await.unwrap();
        assert!(first.id.unwrap() > 0);
        assert!(second.id.unwrap() > first.id.unwrap());

        assert_eq!(repo.delete_all().await.unwrap(), 2);

        let third = repo.save(Person::new("Jon", "Winterfell", "Stark")).await.unwrap();
        assert!(third.id.unwrap() > second.id.unwrap());
    }

    #[tokio::test]
    async fn test_legacy_update_swaps_city_and_house() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        let mut person = repo.save(Person::new("Alice", "Linz", "A1")).await.unwrap();

        person.city = "Wien".to_string();
        person.house = "B2".to_string();
        let returned = repo.save(person.clone()).await.unwrap();

        // save hands back its input untouched
        assert_eq!(returned, person);

        let stored = repo.find(person.id.unwrap()).await.success().unwrap();
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.city, "B2");
        assert_eq!(stored.house, "Wien");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_declared_update_keeps_columns() {
        let (_dir, repo) = setup(ColumnOrder::Declared).await;
        let mut person = repo.save(Person::new("Alice", "Linz", "A1")).await.unwrap();

        person.city = "Wien".to_string();
        person.house = "B2".to_string();
        repo.save(person.clone()).await.unwrap();

        let stored = repo.find(person.id.unwrap()).await.success().unwrap();
        assert_eq!(stored, person);
    }

    #[tokio::test]
    async fn test_update_outcomes() {
        let (_dir, repo) = setup(ColumnOrder::Declared).await;
        let saved = repo.save(Person::new("Sansa", "Winterfell", "Stark")).await.unwrap();

        assert!(matches!(repo.update(&saved).await, Outcome::Success(1)));
        assert!(repo.update(&saved.clone().with_id(999)).await.is_not_found());
        assert!(repo
            .update(&Person::new("Sansa", "Winterfell", "Stark"))
            .await
            .is_not_found());

        let mut too_long = saved.clone();
        too_long.name = "x".repeat(300);
        assert!(matches!(
            repo.update(&too_long).await.failure(),
            Some(DbError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_save_with_stale_id_inserts_new_row() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        let saved = repo.save(Person::new("Ned", "Winterfell", "Stark")).await.unwrap();
        repo.delete(saved.id.unwrap()).await.unwrap();

        let resaved = repo.save(saved.clone()).await.unwrap();
        assert_ne!(resaved.id, saved.id);
        assert!(repo.find(saved.id.unwrap()).await.is_not_found());

        // the fallback insert binds in column order, so nothing is swapped
        let stored = repo.find(resaved.id.unwrap()).await.success().unwrap();
        assert_eq!(stored.city, "Winterfell");
        assert_eq!(stored.house, "Stark");
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        repo.save(Person::new("Tyrion", "Casterly Rock", "Lannister")).await.unwrap();

        let err = repo
            .save(Person::new("Tyrion", "Casterly Rock", "Lannister"))
            .await
            .unwrap_err();
        match &err {
            DbError::UniqueViolation { field } => {
                assert_eq!(field, "person.name, person.city, person.house")
            }
            other => panic!("expected unique violation, got {other:?}"),
        }
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stale_id_onto_existing_key_fails_without_new_row() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        repo.save(Person::new("Cersei", "King's Landing", "Lannister")).await.unwrap();

        let err = repo
            .save(Person::new("Cersei", "King's Landing", "Lannister").with_id(42))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_error_falls_back_to_insert() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        repo.save(Person::new("Jon", "Stark", "Winterfell")).await.unwrap();
        let arya = repo.save(Person::new("Arya", "Braavos", "Stark")).await.unwrap();
        assert_eq!(arya.id, Some(2));

        // the swapped update lands on (Jon, Stark, Winterfell) and hits the key
        let moved = Person::new("Jon", "Winterfell", "Stark").with_id(2);
        assert!(matches!(
            repo.update(&moved).await.failure(),
            Some(DbError::UniqueViolation { .. })
        ));

        let saved = repo.save(moved).await.unwrap();
        assert_eq!(saved, Person::new("Jon", "Winterfell", "Stark").with_id(3));
        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(repo.find(2).await.success(), Some(arya));
    }

    #[tokio::test]
    async fn test_delete_then_find_is_not_found() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        let saved = repo.save(Person::new("Robb", "Winterfell", "Stark")).await.unwrap();
        let id = saved.id.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert!(repo.find(id).await.is_not_found());
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_all_clears_everything() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        let a = repo.save(Person::new("Jaime", "Casterly Rock", "Lannister")).await.unwrap();
        let b = repo.save(Person::new("Bran", "Winterfell", "Stark")).await.unwrap();

        repo.delete_all().await.unwrap();

        assert!(repo.find(a.id.unwrap()).await.is_not_found());
        assert!(repo.find(b.id.unwrap()).await.is_not_found());
        assert!(repo.find_by_house("Lannister").await.unwrap().is_empty());
        assert!(repo.find_by_house("Stark").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_house_matches_house_only() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;
        let jon = repo.save(Person::new("Jon", "Castle Black", "Stark")).await.unwrap();
        repo.save(Person::new("Tywin", "Casterly Rock", "Lannister")).await.unwrap();
        let arya = repo.save(Person::new("Arya", "Braavos", "Stark")).await.unwrap();
        // a city named like the house must not match
        repo.save(Person::new("Hodor", "Stark", "Hodor")).await.unwrap();

        let starks = repo.find_by_house("Stark").await.unwrap();
        assert_eq!(starks, vec![jon, arya]);
        assert!(repo.find_by_house("Targaryen").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_table_is_failure_not_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = DbConfig::new(dir.path().join("bare.db")).run_migrations(false);
        let repo = Database::new(config).await.unwrap().persons();

        assert!(repo.find(1).await.is_failure());
        assert!(matches!(
            repo.find_by_house("Stark").await,
            Err(DbError::QueryFailed(_))
        ));
        assert!(repo.save(Person::new("Jon", "Winterfell", "Stark")).await.is_err());
    }

    #[tokio::test]
    async fn test_insert_validates_before_sql() {
        let (_dir, repo) = setup(ColumnOrder::Legacy).await;

        let err = repo
            .save(Person::new("Daenerys", "M".repeat(256), "Targaryen"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
