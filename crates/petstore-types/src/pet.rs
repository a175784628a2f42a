use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::PetStatus;

/// Unique identifier for a pet.
///
/// Serializes transparently as its integer value, so `{"id": 7}` on the
/// wire maps straight to `PetId(7)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(i64);

impl PetId {
    /// Create an id from its integer value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The underlying integer.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PetId({})", self.0)
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet record managed by the store resource.
///
/// `id` is a required field: a pet without an assigned id cannot be
/// persisted, and a payload that omits it fails deserialization before it
/// ever reaches the store. `tags` is a set, so duplicate tags collapse and
/// their order carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub status: PetStatus,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub category: Option<String>,
}

impl Pet {
    /// Create a pet with no tags and no category.
    pub fn new(id: PetId, name: impl Into<String>, status: PetStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            tags: BTreeSet::new(),
            category: None,
        }
    }
}
