//! Record store consistency tests.
//!
//! Properties exercised against the in-memory backend, which carries the
//! same operation semantics as the Postgres store:
//! - create-then-get round-trips every field
//! - list_all after N creates and M deletes holds exactly N-M records
//! - update touches only the targeted id
//! - delete removes the record and the id is never reused
//! - operations on never-issued ids fail with NotFound

use cupcakes::store::{CupcakeStore, MemoryStore, NewCupcake, StoreError};

fn fields(flavor: &str, rating: f64) -> NewCupcake {
    NewCupcake {
        flavor: flavor.to_string(),
        size: "Medium".to_string(),
        rating,
        image: format!("http://example.com/{}.png", flavor.to_lowercase()),
    }
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let store = MemoryStore::new();

    let created = store.create(fields("Chocolate", 5.0)).await.unwrap();
    let fetched = store.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.flavor, "Chocolate");
    assert_eq!(fetched.size, "Medium");
    assert_eq!(fetched.rating, 5.0);
    assert_eq!(fetched.image, "http://example.com/chocolate.png");
}

#[tokio::test]
async fn test_list_count_tracks_creates_and_deletes() {
    let store = MemoryStore::new();

    let mut ids = Vec::new();
    for i in 0..5 {
        let record = store.create(fields("Vanilla", i as f64)).await.unwrap();
        ids.push(record.id);
    }
    store.delete(ids[0]).await.unwrap();
    store.delete(ids[3]).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|c| c.id != ids[0] && c.id != ids[3]));
}

#[tokio::test]
async fn test_update_leaves_other_records_untouched() {
    let store = MemoryStore::new();

    let first = store.create(fields("Vanilla", 4.0)).await.unwrap();
    let second = store.create(fields("Lemon", 3.0)).await.unwrap();

    let updated = store
        .update(first.id, fields("Mocha", 1.5))
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.flavor, "Mocha");
    assert_eq!(updated.rating, 1.5);

    let untouched = store.get(second.id).await.unwrap();
    assert_eq!(untouched, second);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let store = MemoryStore::new();

    let record = store.create(fields("Lemon", 2.0)).await.unwrap();
    store.delete(record.id).await.unwrap();

    let err = store.get(record.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));

    let all = store.list_all().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_never_issued_id_fails_every_operation() {
    let store = MemoryStore::new();
    store.create(fields("Vanilla", 4.0)).await.unwrap();

    assert!(matches!(
        store.get(999).await.unwrap_err(),
        StoreError::NotFound { id: 999 }
    ));
    assert!(matches!(
        store.update(999, fields("Mocha", 1.0)).await.unwrap_err(),
        StoreError::NotFound { id: 999 }
    ));
    assert!(matches!(
        store.delete(999).await.unwrap_err(),
        StoreError::NotFound { id: 999 }
    ));
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let store = MemoryStore::new();

    let a = store.create(fields("Vanilla", 4.0)).await.unwrap();
    let b = store.create(fields("Lemon", 3.0)).await.unwrap();
    store.delete(a.id).await.unwrap();
    store.delete(b.id).await.unwrap();

    let c = store.create(fields("Mocha", 2.0)).await.unwrap();
    assert!(c.id > b.id);
}
