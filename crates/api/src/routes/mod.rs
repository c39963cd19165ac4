pub mod graphql;
pub mod health;
pub mod resource;

use axum::Router;
use catalog_db::models::item::Item;
use catalog_db::models::product::Product;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /products           list, create
/// /products/{id}      get, patch, delete
///
/// /items              list, create
/// /items/{id}         get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", resource::router::<Product>())
        .nest("/items", resource::router::<Item>())
}
