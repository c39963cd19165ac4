//! Route definitions for a catalog resource.

use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;

use crate::handlers::resource::{self, Resource};
use crate::state::AppState;

/// Routes mounted at `/{resource}`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router<T>() -> Router<AppState>
where
    T: Resource,
    T::Create: DeserializeOwned,
    T::Update: DeserializeOwned,
{
    Router::new()
        .route("/", get(resource::list::<T>).post(resource::create::<T>))
        .route(
            "/{id}",
            get(resource::get_by_id::<T>)
                .patch(resource::update::<T>)
                .delete(resource::delete::<T>),
        )
}
