//! Domain primitives shared by the storage and protocol layers.
//!
//! Nothing in this crate touches the database or a wire format; it holds
//! the id type, the domain error, the presence-aware [`patch::Patch`]
//! wrapper used by update payloads, and field validation rules.

pub mod error;
pub mod patch;
pub mod types;
pub mod validation;
