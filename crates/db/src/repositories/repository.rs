use async_trait::async_trait;
use catalog_core::types::DbId;

use super::record::Record;

/// Create/read/update/delete contract shared by every protocol adapter.
///
/// Absence is a normal outcome: lookups and updates return `None` and
/// deletes return `false` when no row has the given id. Storage failures
/// surface as `sqlx::Error` and are never swallowed.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Insert a new record and return it with its store-assigned id.
    async fn create(&self, input: &T::Create) -> Result<T, sqlx::Error>;

    /// Snapshot of every record, ordered by id.
    async fn get_all(&self) -> Result<Vec<T>, sqlx::Error>;

    async fn get_by_id(&self, id: DbId) -> Result<Option<T>, sqlx::Error>;

    /// Overwrite only the fields supplied in `patch`.
    ///
    /// Returns `None` without writing anything if no row with `id` exists.
    async fn update(&self, id: DbId, patch: &T::Update) -> Result<Option<T>, sqlx::Error>;

    /// Permanently delete a record. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
