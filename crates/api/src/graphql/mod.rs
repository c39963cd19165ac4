//! GraphQL adapter over the catalog repositories.
//!
//! Queries return `null` for absent ids, `update*` mutations return `null`
//! when the id does not exist and `delete*` mutations return the
//! repository's boolean.

mod mutation;
mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_db::models::item::Item;
use catalog_db::models::product::Product;
use catalog_db::repositories::Repository;

use crate::state::AppState;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with both repositories installed as context data.
pub fn build_schema(
    products: Arc<dyn Repository<Product>>,
    items: Arc<dyn Repository<Item>>,
) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(products)
        .data(items)
        .finish()
}

/// POST /graphql
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.graphql.execute(request).await)
}

/// GET /graphql
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Map a domain error to a GraphQL error carrying an `extensions.code`.
fn core_error(err: CoreError) -> async_graphql::Error {
    let code = match &err {
        CoreError::NotFound { .. } => "NOT_FOUND",
        CoreError::Validation(_) => "VALIDATION_ERROR",
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

/// Log a storage failure and return a sanitized GraphQL error.
fn storage_error(err: sqlx::Error) -> async_graphql::Error {
    tracing::error!(error = %err, "Database error");
    async_graphql::Error::new("An internal error occurred")
        .extend_with(|_, ext| ext.set("code", "INTERNAL_ERROR"))
}
