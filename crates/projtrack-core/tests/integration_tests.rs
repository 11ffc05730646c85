//! Projtrack Core Integration Tests
//!
//! Services wired to the SQLite store and the Gemini client.

use std::sync::Arc;

use projtrack_core::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn sqlite_store() -> Arc<SqliteProjectStore> {
    let db = Database::in_memory()
        .await
        .expect("Failed to create database");
    Arc::new(SqliteProjectStore::new(db))
}

#[tokio::test]
async fn test_project_lifecycle() {
    let store = sqlite_store().await;
    let service = ProjectService::new(store);

    let input = ProjectValidator::check_create(&json!({
        "name": "Data platform",
        "description": "Warehouse migration",
        "status": "In Progress",
        "startDate": "2024-01-15"
    }))
    .unwrap();
    let created = service.create(input).await.unwrap();
    assert_eq!(created.status, "in progress");
    assert!(created.end_date.is_none());

    let changes = ProjectValidator::check_update(&json!({
        "status": "completed",
        "endDate": "2024-06-30T12:00:00Z"
    }))
    .unwrap();
    let updated = service.update(&created.id, changes).await.unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.name, "Data platform");
    assert!(updated.end_date.is_some());

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 1);

    let deleted = service.delete(&created.id).await.unwrap();
    assert_eq!(deleted.id, created.id);

    let err = service.get_by_id(&created.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_completed_without_end_date_is_rejected() {
    let service = ProjectService::new(sqlite_store().await);

    let input = ProjectValidator::check_create(&json!({
        "name": "Launch",
        "description": "Go live",
        "status": "completed",
        "startDate": "2024-01-01"
    }))
    .unwrap();

    let err = service.create(input).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "End date is required when status is Completed");
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_unknown_project() {
    let service = ProjectService::new(sqlite_store().await);
    let changes = ProjectValidator::check_update(&json!({"name": "Renamed"})).unwrap();

    let err = service.update("no-such-id", changes).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_graphics_over_sqlite() {
    let store = sqlite_store().await;
    let projects = ProjectService::new(store.clone());
    let analytics = AnalyticsService::new(store, None);

    for (name, status, end) in [
        ("a", "in progress", None),
        ("b", "completed", Some("2024-02-01")),
        ("c", "completed", Some("2024-03-01")),
    ] {
        let mut body = json!({
            "name": name,
            "description": "x",
            "status": status,
            "startDate": "2024-01-01"
        });
        if let Some(end) = end {
            body["endDate"] = json!(end);
        }
        let input = ProjectValidator::check_create(&body).unwrap();
        projects.create(input).await.unwrap();
    }

    let data = analytics.get_graphics_data().await.unwrap();
    assert_eq!(data.total_projects, 3);
    assert_eq!(data.completed_projects, 2);
    assert_eq!(data.in_progress_projects, 1);
    assert_eq!(data.projects_by_status[0].status, "in progress");
    assert_eq!(data.projects_by_status[0].percentage, 33.33);
    assert_eq!(data.projects_by_status[1].percentage, 66.67);
}

#[tokio::test]
async fn test_analysis_through_gemini() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "On track."}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = sqlite_store().await;
    let projects = ProjectService::new(store.clone());
    let created = projects
        .create(
            ProjectValidator::check_create(&json!({
                "name": "Mobile app",
                "description": "iOS and Android",
                "status": "in progress",
                "startDate": "2024-04-01"
            }))
            .unwrap(),
        )
        .await
        .unwrap();

    let client = GeminiClient::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .build()
        .unwrap();
    let analytics = AnalyticsService::new(store, Some(Arc::new(client)));

    let analysis = analytics.generate_analysis(&created.id).await.unwrap();
    assert_eq!(analysis.summary, "On track.");
    assert_eq!(analysis.total_projects, 1);
}
