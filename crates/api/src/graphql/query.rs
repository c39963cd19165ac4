use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use catalog_core::types::DbId;
use catalog_db::models::item::Item;
use catalog_db::models::product::Product;
use catalog_db::repositories::Repository;

use super::storage_error;
use super::types::{ItemType, ProductType};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All products.
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductType>> {
        let repo = ctx.data::<Arc<dyn Repository<Product>>>()?;
        let products = repo.get_all().await.map_err(storage_error)?;
        Ok(products.into_iter().map(ProductType::from).collect())
    }

    /// One product, or `null` if no product has this id.
    async fn product(&self, ctx: &Context<'_>, id: DbId) -> Result<Option<ProductType>> {
        let repo = ctx.data::<Arc<dyn Repository<Product>>>()?;
        let product = repo.get_by_id(id).await.map_err(storage_error)?;
        Ok(product.map(ProductType::from))
    }

    /// All items.
    async fn items(&self, ctx: &Context<'_>) -> Result<Vec<ItemType>> {
        let repo = ctx.data::<Arc<dyn Repository<Item>>>()?;
        let items = repo.get_all().await.map_err(storage_error)?;
        Ok(items.into_iter().map(ItemType::from).collect())
    }

    /// One item, or `null` if no item has this id.
    async fn item(&self, ctx: &Context<'_>, id: DbId) -> Result<Option<ItemType>> {
        let repo = ctx.data::<Arc<dyn Repository<Item>>>()?;
        let item = repo.get_by_id(id).await.map_err(storage_error)?;
        Ok(item.map(ItemType::from))
    }
}
