use axum::routing::get;
use axum::Router;

use crate::graphql;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET  /graphql   -> GraphiQL explorer
/// POST /graphql   -> execute a query or mutation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/graphql",
        get(graphql::graphiql).post(graphql::graphql_handler),
    )
}
