//! Repository layer.
//!
//! A single generic [`Repository`] contract covers every entity. The shape of
//! an entity (table, columns, how DTOs map to column values) is described by
//! its [`Record`] impl, which lives next to the type alias for its
//! PostgreSQL repository.

mod item_repo;
mod memory_repo;
mod pg_repo;
mod product_repo;
mod record;
mod repository;

pub use item_repo::ItemRepo;
pub use memory_repo::MemoryRepository;
pub use pg_repo::PgRepository;
pub use product_repo::ProductRepo;
pub use record::{ColumnValue, Record};
pub use repository::Repository;
