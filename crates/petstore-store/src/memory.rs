//! In-memory pet store.
//!
//! [`InMemoryPetStore`] keeps all records in a `HashMap` protected by a
//! single `RwLock`. It implements the full [`PetStore`] trait and is the
//! store the demo server runs on; data is lost when the process exits.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use petstore_types::{Pet, PetId, PetStatus};

use crate::error::{StoreError, StoreResult};
use crate::seed::seed_pets;
use crate::traits::PetStore;

/// An in-memory implementation of [`PetStore`].
///
/// All records live in a `HashMap` behind a single `RwLock`; every trait
/// operation acquires the lock exactly once. Scan results are returned in
/// ascending id order so responses are deterministic.
#[derive(Debug)]
pub struct InMemoryPetStore {
    pets: RwLock<HashMap<PetId, Pet>>,
}

impl InMemoryPetStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            pets: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with the seed menagerie.
    pub fn with_seed_data() -> Self {
        let pets = seed_pets().into_iter().map(|p| (p.id, p)).collect();
        Self {
            pets: RwLock::new(pets),
        }
    }
}

impl Default for InMemoryPetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PetStore for InMemoryPetStore {
    fn get(&self, id: PetId) -> StoreResult<Option<Pet>> {
        let pets = self
            .pets
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(pets.get(&id).cloned())
    }

    fn insert(&self, pet: Pet) -> StoreResult<Pet> {
        let mut pets = self
            .pets
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        pets.insert(pet.id, pet.clone());
        Ok(pet)
    }

    fn delete(&self, id: PetId) -> StoreResult<bool> {
        let mut pets = self
            .pets
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(pets.remove(&id).is_some())
    }

    fn find_by_status(&self, statuses: &[PetStatus]) -> StoreResult<Vec<Pet>> {
        let pets = self
            .pets
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        let mut result: Vec<Pet> = pets
            .values()
            .filter(|p| statuses.contains(&p.status))
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    fn find_by_tags(&self, tags: &BTreeSet<String>) -> StoreResult<Vec<Pet>> {
        let pets = self
            .pets
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        let mut result: Vec<Pet> = pets
            .values()
            .filter(|p| !p.tags.is_disjoint(tags))
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    fn len(&self) -> StoreResult<usize> {
        let pets = self
            .pets
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        Ok(pets.len())
    }
}
