//! # Tagged Outcomes
//!
//! Three-way result for operations where "nothing matched" is a normal,
//! distinguishable answer rather than an error.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Operation        Success(T)          NotFound        Failure(e)      │
//! │   ─────────        ──────────          ────────        ──────────      │
//! │   update           Success(1)          0 rows          SQL error,      │
//! │                                        or no id        >1 rows         │
//! │   find             Success(Person)     no row          SQL error       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{DbError, DbResult};

/// Result of a store operation that may legitimately match nothing.
#[derive(Debug)]
#[must_use]
pub enum Outcome<T> {
    /// The operation matched and produced a value.
    Success(T),
    /// The store answered, but nothing matched.
    NotFound,
    /// The store could not answer.
    Failure(DbError),
}

impl<T> Outcome<T> {
    /// Returns true for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns true for [`Outcome::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }

    /// Returns true for [`Outcome::Failure`].
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Collapses NotFound and Failure into `None`.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::NotFound | Outcome::Failure(_) => None,
        }
    }

    /// Returns the failure cause, if any.
    pub fn failure(self) -> Option<DbError> {
        match self {
            Outcome::Failure(err) => Some(err),
            Outcome::Success(_) | Outcome::NotFound => None,
        }
    }

    /// Converts into a `DbResult`, keeping NotFound as `Ok(None)`.
    pub fn into_result(self) -> DbResult<Option<T>> {
        match self {
            Outcome::Success(value) => Ok(Some(value)),
            Outcome::NotFound => Ok(None),
            Outcome::Failure(err) => Err(err),
        }
    }

    /// Maps the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::NotFound => Outcome::NotFound,
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T> From<DbResult<Option<T>>> for Outcome<T> {
    fn from(result: DbResult<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Outcome::Success(value),
            Ok(None) => Outcome::NotFound,
            Err(err) => Outcome::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let found: Outcome<i32> = Ok(Some(3)).into();
        assert!(found.is_success());
        assert_eq!(found.success(), Some(3));

        let missing: Outcome<i32> = Ok(None).into();
        assert!(missing.is_not_found());
        assert_eq!(missing.success(), None);

        let failed: Outcome<i32> = Err(DbError::QueryFailed("boom".to_string())).into();
        assert!(failed.is_failure());
        assert!(matches!(failed.failure(), Some(DbError::QueryFailed(_))));
    }

    #[test]
    fn test_not_found_and_failure_stay_distinct_in_result() {
        let missing: Outcome<i32> = Outcome::NotFound;
        assert!(matches!(missing.into_result(), Ok(None)));

        let failed: Outcome<i32> = Outcome::Failure(DbError::NotInitialized);
        assert!(failed.into_result().is_err());
    }

    #[test]
    fn test_map_keeps_tag() {
        let doubled = Outcome::Success(2).map(|n| n * 2);
        assert_eq!(doubled.success(), Some(4));
        assert!(Outcome::<i32>::NotFound.map(|n| n * 2).is_not_found());
    }
}
