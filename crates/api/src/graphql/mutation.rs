use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use catalog_core::types::DbId;
use catalog_db::models::item::{CreateItem, Item, UpdateItem};
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};
use catalog_db::models::ValidateInput;
use catalog_db::repositories::Repository;

use super::types::{
    CreateItemInput, CreateProductInput, ItemType, ProductType, UpdateItemInput,
    UpdateProductInput,
};
use super::{core_error, storage_error};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        input: CreateProductInput,
    ) -> Result<ProductType> {
        let repo = ctx.data::<Arc<dyn Repository<Product>>>()?;
        let input = CreateProduct::from(input);
        input.validate_input().map_err(core_error)?;

        let product = repo.create(&input).await.map_err(storage_error)?;
        tracing::info!(id = product.id, "Product created via GraphQL");
        Ok(product.into())
    }

    /// Returns `null` if no product has this id.
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        input: UpdateProductInput,
    ) -> Result<Option<ProductType>> {
        let repo = ctx.data::<Arc<dyn Repository<Product>>>()?;
        let patch = UpdateProduct::try_from(input).map_err(core_error)?;
        patch.validate_input().map_err(core_error)?;

        let product = repo.update(id, &patch).await.map_err(storage_error)?;
        Ok(product.map(ProductType::from))
    }

    /// Returns `true` if a product was removed.
    async fn delete_product(&self, ctx: &Context<'_>, id: DbId) -> Result<bool> {
        let repo = ctx.data::<Arc<dyn Repository<Product>>>()?;
        repo.delete(id).await.map_err(storage_error)
    }

    async fn create_item(&self, ctx: &Context<'_>, input: CreateItemInput) -> Result<ItemType> {
        let repo = ctx.data::<Arc<dyn Repository<Item>>>()?;
        let input = CreateItem::from(input);
        input.validate_input().map_err(core_error)?;

        let item = repo.create(&input).await.map_err(storage_error)?;
        tracing::info!(id = item.id, "Item created via GraphQL");
        Ok(item.into())
    }

    /// Returns `null` if no item has this id.
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        id: DbId,
        input: UpdateItemInput,
    ) -> Result<Option<ItemType>> {
        let repo = ctx.data::<Arc<dyn Repository<Item>>>()?;
        let patch = UpdateItem::try_from(input).map_err(core_error)?;
        patch.validate_input().map_err(core_error)?;

        let item = repo.update(id, &patch).await.map_err(storage_error)?;
        Ok(item.map(ItemType::from))
    }

    /// Returns `true` if an item was removed.
    async fn delete_item(&self, ctx: &Context<'_>, id: DbId) -> Result<bool> {
        let repo = ctx.data::<Arc<dyn Repository<Item>>>()?;
        repo.delete(id).await.map_err(storage_error)
    }
}
