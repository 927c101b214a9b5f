//! Functional tests for gopher operations without an HTTP server

use gopher_api::api::models::{CreateGopherRequest, UpdateGopherRequest};
use gopher_api::config::ValidationConfig;
use gopher_api::service::GopherService;
use gopher_api::store::InMemoryStore;
use gopher_api::AppError;
use std::collections::HashSet;
use std::sync::Arc;

fn create_test_service() -> GopherService {
    GopherService::new(Arc::new(InMemoryStore::new()), ValidationConfig::default())
}

#[tokio::test]
async fn test_create_then_get_returns_equal_entity() {
    let service = create_test_service();

    for name in ["Gopher", "Gordon", "Gophette"] {
        let created = service.create(CreateGopherRequest::new(name)).await.unwrap();
        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }
}

#[tokio::test]
async fn test_duplicate_explicit_id_conflicts() {
    let service = create_test_service();
    service
        .create(CreateGopherRequest::with_id("1", "Gopher"))
        .await
        .unwrap();

    let err = service
        .create(CreateGopherRequest::with_id("1", "Another"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_empty_name_fails_validation() {
    let service = create_test_service();

    let err = service.create(CreateGopherRequest::new("")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_then_get_not_found() {
    let service = create_test_service();
    let created = service.create(CreateGopherRequest::new("Gopher")).await.unwrap();

    service.delete(&created.id).await.unwrap();

    let err = service.get(&created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_list_returns_every_created_gopher() {
    let service = create_test_service();
    let mut created = Vec::new();
    for i in 0..10 {
        created.push(
            service
                .create(CreateGopherRequest::new(format!("Gopher {}", i)))
                .await
                .unwrap(),
        );
    }

    let listed = service.list().await.unwrap();
    assert_eq!(listed, created);

    let ids: HashSet<_> = listed.iter().map(|g| g.id.clone()).collect();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_update_missing_not_found() {
    let service = create_test_service();

    let err = service
        .update("missing", UpdateGopherRequest::new("Gordon"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_preserves_id() {
    let service = create_test_service();
    let created = service.create(CreateGopherRequest::new("Gopher")).await.unwrap();

    let updated = service
        .update(&created.id, UpdateGopherRequest::new("Gordon"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Gordon");
    assert_eq!(service.get(&created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_empty_name_leaves_gopher_unchanged() {
    let service = create_test_service();
    let created = service.create(CreateGopherRequest::new("Gopher")).await.unwrap();

    let err = service
        .update(&created.id, UpdateGopherRequest::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(service.get(&created.id).await.unwrap(), created);
}
