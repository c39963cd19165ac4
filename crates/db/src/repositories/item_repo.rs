//! Repository for the `items` table.

use catalog_core::patch::Patch;
use catalog_core::types::DbId;

use super::pg_repo::PgRepository;
use super::record::{ColumnValue, Record};
use crate::models::item::{CreateItem, Item, UpdateItem};

const COLUMNS: &str = "id, title, description";

/// Provides CRUD operations for items.
pub type ItemRepo = PgRepository<Item>;

impl Record for Item {
    type Create = CreateItem;
    type Update = UpdateItem;

    const ENTITY: &'static str = "Item";
    const TABLE: &'static str = "items";
    const COLUMNS: &'static str = COLUMNS;

    fn id(&self) -> DbId {
        self.id
    }

    fn insert_columns(input: &CreateItem) -> Vec<(&'static str, ColumnValue)> {
        vec![
            ("title", ColumnValue::Text(Some(input.title.clone()))),
            ("description", ColumnValue::Text(input.description.clone())),
        ]
    }

    fn update_columns(patch: &UpdateItem) -> Vec<(&'static str, ColumnValue)> {
        let mut columns = Vec::new();
        if let Patch::Set(title) = &patch.title {
            columns.push(("title", ColumnValue::Text(Some(title.clone()))));
        }
        if let Patch::Set(description) = &patch.description {
            columns.push(("description", ColumnValue::Text(description.clone())));
        }
        columns
    }

    fn from_create(id: DbId, input: &CreateItem) -> Self {
        Item {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
        }
    }

    fn apply(&mut self, patch: &UpdateItem) {
        patch.title.apply_to(&mut self.title);
        patch.description.apply_to(&mut self.description);
    }
}
