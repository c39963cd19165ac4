//! Repository for the `products` table.

use catalog_core::patch::Patch;
use catalog_core::types::DbId;

use super::pg_repo::PgRepository;
use super::record::{ColumnValue, Record};
use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, description";

/// Provides CRUD operations for products.
pub type ProductRepo = PgRepository<Product>;

impl Record for Product {
    type Create = CreateProduct;
    type Update = UpdateProduct;

    const ENTITY: &'static str = "Product";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static str = COLUMNS;

    fn id(&self) -> DbId {
        self.id
    }

    fn insert_columns(input: &CreateProduct) -> Vec<(&'static str, ColumnValue)> {
        vec![
            ("name", ColumnValue::Text(Some(input.name.clone()))),
            ("price", ColumnValue::Float(input.price)),
            ("description", ColumnValue::Text(input.description.clone())),
        ]
    }

    fn update_columns(patch: &UpdateProduct) -> Vec<(&'static str, ColumnValue)> {
        let mut columns = Vec::new();
        if let Patch::Set(name) = &patch.name {
            columns.push(("name", ColumnValue::Text(Some(name.clone()))));
        }
        if let Patch::Set(price) = patch.price {
            columns.push(("price", ColumnValue::Float(price)));
        }
        if let Patch::Set(description) = &patch.description {
            columns.push(("description", ColumnValue::Text(description.clone())));
        }
        columns
    }

    fn from_create(id: DbId, input: &CreateProduct) -> Self {
        Product {
            id,
            name: input.name.clone(),
            price: input.price,
            description: input.description.clone(),
        }
    }

    fn apply(&mut self, patch: &UpdateProduct) {
        patch.name.apply_to(&mut self.name);
        patch.price.apply_to(&mut self.price);
        patch.description.apply_to(&mut self.description);
    }
}
