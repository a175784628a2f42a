//! Seed data loaded at process start.
//!
//! A fixed menagerie covering every status with overlapping tag sets, so
//! the filter endpoints return non-trivial results out of the box.

use std::collections::BTreeSet;

use petstore_types::{Pet, PetId, PetStatus};

/// The pets a fresh store is populated with (ids 1..=7).
pub fn seed_pets() -> Vec<Pet> {
    vec![
        pet(1, "Rex", PetStatus::Available, &["friendly", "trained"], Some("dogs")),
        pet(2, "Mittens", PetStatus::Available, &["playful"], Some("cats")),
        pet(3, "Goldie", PetStatus::Pending, &["quiet"], Some("fish")),
        pet(4, "Bruno", PetStatus::Sold, &["guard", "trained"], Some("dogs")),
        pet(5, "Luna", PetStatus::Pending, &["quiet", "shy"], Some("cats")),
        pet(6, "Pickles", PetStatus::Available, &["loud", "talkative"], Some("birds")),
        pet(7, "Shadow", PetStatus::Sold, &["shy"], Some("cats")),
    ]
}

fn pet(id: i64, name: &str, status: PetStatus, tags: &[&str], category: Option<&str>) -> Pet {
    Pet {
        id: PetId::new(id),
        name: name.to_string(),
        status,
        tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
        category: category.map(str::to_string),
    }
}
