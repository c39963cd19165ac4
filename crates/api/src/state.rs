use std::sync::Arc;

use catalog_db::models::item::Item;
use catalog_db::models::product::Product;
use catalog_db::repositories::Repository;

use crate::graphql::{self, CatalogSchema};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Product repository, shared with the GraphQL schema and gRPC service.
    pub products: Arc<dyn Repository<Product>>,
    /// Item repository, shared with the GraphQL schema.
    pub items: Arc<dyn Repository<Item>>,
    /// GraphQL schema wired to the same repositories.
    pub graphql: CatalogSchema,
}

impl AppState {
    pub fn new(
        products: Arc<dyn Repository<Product>>,
        items: Arc<dyn Repository<Item>>,
    ) -> Self {
        let graphql = graphql::build_schema(Arc::clone(&products), Arc::clone(&items));
        Self {
            products,
            items,
            graphql,
        }
    }
}
