//! Repository contract tests against the in-memory store.

mod common;

use std::sync::Arc;

use catalog_db::models::item::Item;
use catalog_db::models::product::Product;
use catalog_db::repositories::{MemoryRepository, Repository};

fn repo() -> MemoryRepository<Product> {
    MemoryRepository::new()
}

#[tokio::test]
async fn create_then_read() {
    common::create_then_read(&repo()).await;
}

#[tokio::test]
async fn ids_are_unique() {
    common::ids_are_unique(&repo()).await;
}

#[tokio::test]
async fn delete_removes_visibility() {
    common::delete_removes_visibility(&repo()).await;
}

#[tokio::test]
async fn partial_update_preserves_omitted_fields() {
    common::partial_update_preserves_omitted_fields(&repo()).await;
}

#[tokio::test]
async fn supplied_defaults_overwrite() {
    common::supplied_defaults_overwrite(&repo()).await;
}

#[tokio::test]
async fn empty_patch_returns_current() {
    common::empty_patch_returns_current(&repo()).await;
}

#[tokio::test]
async fn update_on_absent_id_is_noop() {
    common::update_on_absent_id_is_noop(&repo()).await;
}

#[tokio::test]
async fn get_all_reflects_current_set() {
    common::get_all_reflects_current_set(&repo()).await;
}

#[tokio::test]
async fn delete_is_idempotent() {
    common::delete_is_idempotent(&repo()).await;
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let repo = repo();
    let first = repo
        .create(&common::new_product("One", 1.0, None))
        .await
        .unwrap();
    repo.delete(first.id).await.unwrap();

    let second = repo
        .create(&common::new_product("Two", 2.0, None))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn concurrent_patches_do_not_interleave() {
    common::concurrent_patches_do_not_interleave(Arc::new(repo())).await;
}

#[tokio::test]
async fn item_partial_update_and_delete() {
    common::item_partial_update_and_delete(&MemoryRepository::<Item>::new()).await;
}
