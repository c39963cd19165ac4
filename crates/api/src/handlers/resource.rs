//! Generic REST handlers shared by every catalog resource.
//!
//! Each handler is instantiated per entity (`create::<Product>`,
//! `create::<Item>`, ...) and talks to the repository the [`Resource`] impl
//! selects from [`AppState`].

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::item::Item;
use catalog_db::models::product::Product;
use catalog_db::models::ValidateInput;
use catalog_db::repositories::{Record, Repository};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// An entity served under `/api/v1`.
pub trait Resource: Record + Serialize {
    fn repository(state: &AppState) -> &Arc<dyn Repository<Self>>;
}

impl Resource for Product {
    fn repository(state: &AppState) -> &Arc<dyn Repository<Self>> {
        &state.products
    }
}

impl Resource for Item {
    fn repository(state: &AppState) -> &Arc<dyn Repository<Self>> {
        &state.items
    }
}

fn not_found<T: Resource>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: T::ENTITY,
        id,
    })
}

/// POST /api/v1/{resource}
pub async fn create<T>(
    State(state): State<AppState>,
    Json(input): Json<T::Create>,
) -> AppResult<(StatusCode, Json<T>)>
where
    T: Resource,
    T::Create: DeserializeOwned,
{
    input.validate_input()?;
    let created = T::repository(&state).create(&input).await?;
    tracing::info!(entity = T::ENTITY, id = created.id(), "Record created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/{resource}
pub async fn list<T: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<T>>> {
    let records = T::repository(&state).get_all().await?;
    tracing::debug!(entity = T::ENTITY, count = records.len(), "Listed records");
    Ok(Json(records))
}

/// GET /api/v1/{resource}/{id}
pub async fn get_by_id<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<T>> {
    let record = T::repository(&state)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;
    Ok(Json(record))
}

/// PATCH /api/v1/{resource}/{id}
///
/// Only fields present in the body are written.
pub async fn update<T>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<T::Update>,
) -> AppResult<Json<T>>
where
    T: Resource,
    T::Update: DeserializeOwned,
{
    patch.validate_input()?;
    let updated = T::repository(&state)
        .update(id, &patch)
        .await?
        .ok_or_else(|| not_found::<T>(id))?;
    tracing::info!(entity = T::ENTITY, id, "Record updated");
    Ok(Json(updated))
}

/// DELETE /api/v1/{resource}/{id}
pub async fn delete<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if T::repository(&state).delete(id).await? {
        tracing::info!(entity = T::ENTITY, id, "Record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<T>(id))
    }
}
