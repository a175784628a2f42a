//! Pet storage for the pet store service.
//!
//! This crate defines the [`PetStore`] trait the HTTP layer is written
//! against, plus an in-memory implementation backed by a `RwLock`-guarded
//! `HashMap`. The trait keeps handlers storage-agnostic; a persistent
//! backend only has to implement [`PetStore`] to slot in.
//!
//! # Modules
//!
//! - [`traits`] — The [`PetStore`] trait defining the storage interface
//! - [`memory`] — [`InMemoryPetStore`], the default backend
//! - [`seed`] — Demo records for a freshly started server
//! - [`error`] — Error types for store operations

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPetStore;
pub use seed::seed_pets;
pub use traits::PetStore;
