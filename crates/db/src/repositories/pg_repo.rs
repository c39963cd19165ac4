//! PostgreSQL implementation of [`Repository`].

use std::marker::PhantomData;

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::record::{ColumnValue, Record};
use super::repository::Repository;

/// Provides CRUD operations for any [`Record`] over a shared pool.
///
/// Each call borrows a pooled connection (or a transaction for updates)
/// that is returned to the pool when the call finishes, on success or
/// failure.
pub struct PgRepository<T> {
    pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

/// Append `col = $n, col = $m, ...` for each assignment.
fn push_assignments(
    builder: &mut QueryBuilder<'_, Postgres>,
    assignments: Vec<(&'static str, ColumnValue)>,
) {
    for (i, (column, value)) in assignments.into_iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        builder.push(column).push(" = ");
        value.push_bind(builder);
    }
}

#[async_trait]
impl<T: Record> Repository<T> for PgRepository<T> {
    async fn create(&self, input: &T::Create) -> Result<T, sqlx::Error> {
        let columns = T::insert_columns(input);
        let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();

        let mut builder =
            QueryBuilder::new(format!("INSERT INTO {} ({}) VALUES (", T::TABLE, names.join(", ")));
        for (i, (_, value)) in columns.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            value.push_bind(&mut builder);
        }
        builder.push(format!(") RETURNING {}", T::COLUMNS));

        builder.build_query_as::<T>().fetch_one(&self.pool).await
    }

    async fn get_all(&self) -> Result<Vec<T>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} ORDER BY id ASC", T::COLUMNS, T::TABLE);
        sqlx::query_as::<_, T>(&query).fetch_all(&self.pool).await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<T>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
        sqlx::query_as::<_, T>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Runs as lock-read-then-write in one transaction, so concurrent patches
    /// of the same row apply one after the other instead of interleaving.
    async fn update(&self, id: DbId, patch: &T::Update) -> Result<Option<T>, sqlx::Error> {
        let assignments = T::update_columns(patch);
        let mut tx = self.pool.begin().await?;

        let select = format!(
            "SELECT {} FROM {} WHERE id = $1 FOR UPDATE",
            T::COLUMNS,
            T::TABLE
        );
        // Dropping `tx` on the early returns rolls it back.
        let Some(current) = sqlx::query_as::<_, T>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if assignments.is_empty() {
            tracing::debug!(table = T::TABLE, id, "Empty patch, returning current row");
            tx.commit().await?;
            return Ok(Some(current));
        }

        let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", T::TABLE));
        push_assignments(&mut builder, assignments);
        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(format!(" RETURNING {}", T::COLUMNS));

        let updated = builder.build_query_as::<T>().fetch_one(&mut *tx).await?;
        tx.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        tracing::debug!(table = T::TABLE, id, rows = result.rows_affected(), "Delete executed");
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
