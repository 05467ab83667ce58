//! Log-and-degrade [`Repository`] over the strict [`PersonRepository`].

use async_trait::async_trait;
use tracing::error;

use super::{PersonRepository, Repository};
use crate::outcome::Outcome;
use got_core::{Person, PersonId};

/// [`Repository`] that reports store failures through `tracing` and keeps going.
///
/// Callers cannot tell "not found" from "store failure" here; use
/// [`LenientRepository::strict`] when the difference matters.
#[derive(Debug, Clone)]
pub struct LenientRepository {
    persons: PersonRepository,
}

impl LenientRepository {
    pub fn new(persons: PersonRepository) -> Self {
        LenientRepository { persons }
    }

    /// The underlying repository with explicit results.
    pub fn strict(&self) -> &PersonRepository {
        &self.persons
    }
}

#[async_trait]
impl Repository for LenientRepository {
    async fn save(&self, person: Person) -> Person {
        match self.persons.save(person.clone()).await {
            Ok(saved) => saved,
            Err(err) => {
                error!(name = %person.name, error = %err, "Saving person failed");
                person
            }
        }
    }

    async fn delete(&self, id: PersonId) {
        if let Err(err) = self.persons.delete(id).await {
            error!(id = %id, error = %err, "Deleting person failed");
        }
    }

    async fn delete_all(&self) {
        if let Err(err) = self.persons.delete_all().await {
            error!(error = %err, "Deleting all persons failed");
        }
    }

    async fn find(&self, id: PersonId) -> Option<Person> {
        match self.persons.find(id).await {
            Outcome::Success(person) => Some(person),
            Outcome::NotFound => None,
            Outcome::Failure(err) => {
                error!(id = %id, error = %err, "Finding person failed");
                None
            }
        }
    }

    async fn find_by_house(&self, house: &str) -> Vec<Person> {
        self.persons.find_by_house(house).await.unwrap_or_else(|err| {
            error!(house = %house, error = %err, "Finding persons of house failed");
            Vec::new()
        })
    }
}
