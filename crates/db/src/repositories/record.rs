use catalog_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, QueryBuilder};

use crate::models::ValidateInput;

/// A value destined for one column of an INSERT or UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(Option<String>),
    Float(f64),
}

impl ColumnValue {
    pub(crate) fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            ColumnValue::Text(value) => {
                builder.push_bind(value);
            }
            ColumnValue::Float(value) => {
                builder.push_bind(value);
            }
        }
    }
}

/// Describes how an entity maps onto its table.
///
/// `update_columns` and `apply` must agree: both touch exactly the fields
/// the patch supplies. `update_columns` drives the SQL repository and
/// `apply` drives the in-memory one.
pub trait Record: for<'r> FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    type Create: ValidateInput + Send + Sync + 'static;
    type Update: ValidateInput + Send + Sync + 'static;

    /// Human-readable entity name used in not-found messages.
    const ENTITY: &'static str;
    const TABLE: &'static str;
    /// Column list for SELECT and RETURNING clauses.
    const COLUMNS: &'static str;

    fn id(&self) -> DbId;

    /// Columns written on insert. Never includes `id`.
    fn insert_columns(input: &Self::Create) -> Vec<(&'static str, ColumnValue)>;

    /// Columns written on update: only the fields present in `patch`.
    fn update_columns(patch: &Self::Update) -> Vec<(&'static str, ColumnValue)>;

    fn from_create(id: DbId, input: &Self::Create) -> Self;

    fn apply(&mut self, patch: &Self::Update);
}
