//! Foundation types for the pet store resource.
//!
//! This crate provides the record types shared by the data store and the
//! HTTP resource handler. Every other petstore crate depends on
//! `petstore-types`.
//!
//! # Key Types
//!
//! - [`PetId`] — Unique integer identifier for a pet
//! - [`Pet`] — The pet record: id, name, status, tags, category
//! - [`PetStatus`] — Availability state (`available`, `pending`, `sold`)
//! - [`Ack`] — Generic `{code, message}` acknowledgment record

pub mod ack;
pub mod error;
pub mod pet;
pub mod status;

pub use ack::Ack;
pub use error::TypeError;
pub use pet::{Pet, PetId};
pub use status::PetStatus;
