//! The [`PetStore`] trait defining the data store interface.
//!
//! Any backend (in-memory, or a persistent one) implements this trait to
//! provide the keyed pet collection behind the resource handler.

use std::collections::BTreeSet;

use petstore_types::{Pet, PetId, PetStatus};

use crate::error::StoreResult;

/// Keyed collection of pet records.
///
/// All implementations must satisfy these invariants:
/// - An id identifies at most one live pet; `insert` replaces any existing
///   record with the same id.
/// - Lookups never fabricate records: `Ok(None)` means the id is unknown.
/// - Filtering operations visit each record once, so results carry no
///   duplicates.
/// - Implementations are safe to share across threads (`Send + Sync`);
///   every operation is synchronous and completes within the call.
pub trait PetStore: Send + Sync {
    /// Fetch a pet by id.
    ///
    /// Returns `Ok(None)` if no pet has this id.
    fn get(&self, id: PetId) -> StoreResult<Option<Pet>>;

    /// Insert or replace a pet, keyed by its id. Returns the stored record.
    fn insert(&self, pet: Pet) -> StoreResult<Pet>;

    /// Delete a pet by id.
    ///
    /// Returns `Ok(true)` if the pet existed and was deleted, `Ok(false)`
    /// if it did not exist.
    fn delete(&self, id: PetId) -> StoreResult<bool>;

    /// All pets whose status is one of `statuses`. O(n) scan.
    fn find_by_status(&self, statuses: &[PetStatus]) -> StoreResult<Vec<Pet>>;

    /// All pets whose tag set intersects `tags`. O(n) scan.
    fn find_by_tags(&self, tags: &BTreeSet<String>) -> StoreResult<Vec<Pet>>;

    /// Number of pets currently stored.
    fn len(&self) -> StoreResult<usize>;

    /// Whether the store holds no pets.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
