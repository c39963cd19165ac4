//! Repository contract checks shared by the in-memory and PostgreSQL suites.
//!
//! Each check takes any `Repository<Product>` so both implementations are
//! held to the same behaviour.

#![allow(dead_code)]

use std::sync::Arc;

use catalog_core::patch::Patch;
use catalog_db::models::item::{CreateItem, Item, UpdateItem};
use catalog_db::models::product::{CreateProduct, Product, UpdateProduct};
use catalog_db::repositories::Repository;

pub fn new_product(name: &str, price: f64, description: Option<&str>) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        price,
        description: description.map(str::to_string),
    }
}

pub async fn create_then_read(repo: &dyn Repository<Product>) {
    let created = repo
        .create(&new_product("Widget", 9.99, Some("blue")))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Widget");
    assert_eq!(created.price, 9.99);
    assert_eq!(created.description.as_deref(), Some("blue"));

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

pub async fn ids_are_unique(repo: &dyn Repository<Product>) {
    let a = repo.create(&new_product("A", 1.0, None)).await.unwrap();
    let b = repo.create(&new_product("B", 2.0, None)).await.unwrap();
    assert_ne!(a.id, b.id);
}

pub async fn delete_removes_visibility(repo: &dyn Repository<Product>) {
    let created = repo.create(&new_product("Gone", 1.0, None)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
    assert!(!repo.delete(created.id).await.unwrap());
}

pub async fn partial_update_preserves_omitted_fields(repo: &dyn Repository<Product>) {
    let created = repo.create(&new_product("A", 10.0, Some("d"))).await.unwrap();
    let patch = UpdateProduct {
        price: Patch::Set(20.0),
        ..Default::default()
    };

    let updated = repo.update(created.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "A");
    assert_eq!(updated.price, 20.0);
    assert_eq!(updated.description.as_deref(), Some("d"));

    let stored = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(stored, Some(updated));
}

pub async fn supplied_defaults_overwrite(repo: &dyn Repository<Product>) {
    let created = repo.create(&new_product("A", 10.0, Some("d"))).await.unwrap();
    let patch = UpdateProduct {
        price: Patch::Set(0.0),
        description: Patch::Set(None),
        ..Default::default()
    };

    let updated = repo.update(created.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.name, "A");
    assert_eq!(updated.price, 0.0);
    assert_eq!(updated.description, None);
}

pub async fn empty_patch_returns_current(repo: &dyn Repository<Product>) {
    let created = repo.create(&new_product("Same", 3.0, None)).await.unwrap();
    let updated = repo
        .update(created.id, &UpdateProduct::default())
        .await
        .unwrap();
    assert_eq!(updated, Some(created));
}

pub async fn update_on_absent_id_is_noop(repo: &dyn Repository<Product>) {
    let before = repo.get_all().await.unwrap().len();
    let patch = UpdateProduct {
        name: Patch::Set("Ghost".to_string()),
        ..Default::default()
    };

    assert_eq!(repo.update(9999, &patch).await.unwrap(), None);
    assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
    assert_eq!(repo.get_all().await.unwrap().len(), before);
}

pub async fn get_all_reflects_current_set(repo: &dyn Repository<Product>) {
    let before = repo.get_all().await.unwrap().len();

    let mut ids = Vec::new();
    for i in 0..4 {
        let created = repo
            .create(&new_product(&format!("P{i}"), i as f64, None))
            .await
            .unwrap();
        ids.push(created.id);
    }
    assert!(repo.delete(ids[0]).await.unwrap());
    assert!(repo.delete(ids[2]).await.unwrap());

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), before + 4 - 2);
    assert!(all.iter().any(|p| p.id == ids[1]));
    assert!(all.iter().all(|p| p.id != ids[0]));
}

pub async fn delete_is_idempotent(repo: &dyn Repository<Product>) {
    repo.create(&new_product("Keep", 1.0, None)).await.unwrap();
    let target = repo.create(&new_product("Drop", 2.0, None)).await.unwrap();

    assert!(repo.delete(target.id).await.unwrap());
    let after_first = repo.get_all().await.unwrap();

    assert!(!repo.delete(target.id).await.unwrap());
    let after_second = repo.get_all().await.unwrap();
    assert_eq!(after_first, after_second);
}

/// Sixteen patches race on one row; name and price must always come from
/// the same patch and the untouched description must survive.
pub async fn concurrent_patches_do_not_interleave(repo: Arc<dyn Repository<Product>>) {
    let created = repo
        .create(&new_product("Base", 1.0, Some("base")))
        .await
        .unwrap();
    let id = created.id;

    let mut handles = Vec::new();
    for i in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let patch = UpdateProduct {
                name: Patch::Set(format!("name-{i}")),
                price: Patch::Set(i as f64),
                ..Default::default()
            };
            repo.update(id, &patch).await.unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_some());
    }

    let stored = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, format!("name-{}", stored.price as i64));
    assert_eq!(stored.description.as_deref(), Some("base"));
}

pub async fn item_partial_update_and_delete(repo: &dyn Repository<Item>) {
    let created = repo
        .create(&CreateItem {
            title: "Test Item".to_string(),
            description: Some("A test".to_string()),
        })
        .await
        .unwrap();

    let patch = UpdateItem {
        title: Patch::Set("Renamed".to_string()),
        ..Default::default()
    };
    let updated = repo.update(created.id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description.as_deref(), Some("A test"));

    let cleared = UpdateItem {
        description: Patch::Set(None),
        ..Default::default()
    };
    let updated = repo.update(created.id, &cleared).await.unwrap().unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description, None);

    assert!(repo.delete(created.id).await.unwrap());
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
    assert!(repo.get_all().await.unwrap().is_empty());
}
