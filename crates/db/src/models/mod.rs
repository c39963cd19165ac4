//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, checked with `validator`
//! - A `Deserialize` update DTO whose fields are [`Patch`] values, so a
//!   field left out of the payload is never confused with one set to an
//!   empty, zero or null value
//!
//! [`Patch`]: catalog_core::patch::Patch

use catalog_core::error::CoreError;

pub mod item;
pub mod product;

/// Payload checks run by protocol adapters before any repository call.
pub trait ValidateInput {
    fn validate_input(&self) -> Result<(), CoreError>;
}
