//! GraphQL object and input types, with conversions to the db DTOs.

use async_graphql::{InputObject, MaybeUndefined, SimpleObject};
use catalog_core::error::CoreError;
use catalog_core::patch::Patch;
use catalog_core::types::DbId;
use catalog_db::models::item::{CreateItem, Item, UpdateItem};
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Product")]
pub struct ProductType {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl From<Product> for ProductType {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Item")]
pub struct ItemType {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
}

impl From<Item> for ItemType {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl From<CreateProductInput> for CreateProduct {
    fn from(input: CreateProductInput) -> Self {
        Self {
            name: input.name,
            price: input.price,
            description: input.description,
        }
    }
}

/// Supply only the fields to change. `description: null` clears it.
#[derive(Debug, InputObject)]
pub struct UpdateProductInput {
    pub name: MaybeUndefined<String>,
    pub price: MaybeUndefined<f64>,
    pub description: MaybeUndefined<String>,
}

impl TryFrom<UpdateProductInput> for UpdateProduct {
    type Error = CoreError;

    fn try_from(input: UpdateProductInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", input.name)?,
            price: required("price", input.price)?,
            description: nullable(input.description),
        })
    }
}

#[derive(Debug, InputObject)]
pub struct CreateItemInput {
    pub title: String,
    pub description: Option<String>,
}

impl From<CreateItemInput> for CreateItem {
    fn from(input: CreateItemInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
        }
    }
}

/// Supply only the fields to change. `description: null` clears it.
#[derive(Debug, InputObject)]
pub struct UpdateItemInput {
    pub title: MaybeUndefined<String>,
    pub description: MaybeUndefined<String>,
}

impl TryFrom<UpdateItemInput> for UpdateItem {
    type Error = CoreError;

    fn try_from(input: UpdateItemInput) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required("title", input.title)?,
            description: nullable(input.description),
        })
    }
}

/// Non-nullable column: `null` is a client error, not "leave unchanged".
fn required<T>(field: &str, value: MaybeUndefined<T>) -> Result<Patch<T>, CoreError> {
    match value {
        MaybeUndefined::Undefined => Ok(Patch::Unchanged),
        MaybeUndefined::Null => Err(CoreError::Validation(format!("{field} cannot be null"))),
        MaybeUndefined::Value(value) => Ok(Patch::Set(value)),
    }
}

fn nullable<T>(value: MaybeUndefined<T>) -> Patch<Option<T>> {
    match value {
        MaybeUndefined::Undefined => Patch::Unchanged,
        MaybeUndefined::Null => Patch::Set(None),
        MaybeUndefined::Value(value) => Patch::Set(Some(value)),
    }
}
