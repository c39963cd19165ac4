//! In-process implementation of [`Repository`].
//!
//! Backs the test suite and local runs without a database. Every operation
//! holds the mutex for its whole read-modify-write, which gives the same
//! non-interleaving guarantee the SQL repository gets from row locks.

use std::collections::BTreeMap;

use async_trait::async_trait;
use catalog_core::types::DbId;
use tokio::sync::Mutex;

use super::record::Record;
use super::repository::Repository;

struct Rows<T> {
    next_id: DbId,
    by_id: BTreeMap<DbId, T>,
}

/// Mutex-guarded map with monotonically increasing ids starting at 1.
/// Ids of deleted records are never reused.
pub struct MemoryRepository<T> {
    rows: Mutex<Rows<T>>,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Rows {
                next_id: 1,
                by_id: BTreeMap::new(),
            }),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn create(&self, input: &T::Create) -> Result<T, sqlx::Error> {
        let mut rows = self.rows.lock().await;
        let id = rows.next_id;
        rows.next_id += 1;

        let record = T::from_create(id, input);
        rows.by_id.insert(id, record.clone());
        Ok(record)
    }

    async fn get_all(&self) -> Result<Vec<T>, sqlx::Error> {
        let rows = self.rows.lock().await;
        Ok(rows.by_id.values().cloned().collect())
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<T>, sqlx::Error> {
        let rows = self.rows.lock().await;
        Ok(rows.by_id.get(&id).cloned())
    }

    async fn update(&self, id: DbId, patch: &T::Update) -> Result<Option<T>, sqlx::Error> {
        let mut rows = self.rows.lock().await;
        let Some(record) = rows.by_id.get_mut(&id) else {
            return Ok(None);
        };
        record.apply(patch);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().await;
        Ok(rows.by_id.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
