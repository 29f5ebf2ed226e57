//! Restore flow against an in-process backend double.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use cli::api::{ApiClient, ApiError};
use schema::{Id, Topic, TopicUpdate, TopicVersion};
use serde_json::json;
use tokio::sync::Mutex;

#[derive(Default)]
struct Backend {
    topic: Option<Topic>,
    versions: Vec<TopicVersion>,
}

type Shared = Arc<Mutex<Backend>>;

fn missing() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Topic not found" })))
}

async fn get_topic(State(db): State<Shared>, Path(id): Path<Id>) -> Result<Json<Topic>, (StatusCode, Json<serde_json::Value>)> {
    let db = db.lock().await;
    db.topic.clone().filter(|t| t.id == id).map(Json).ok_or_else(missing)
}

/// Applies the update and snapshots the result as the next version.
async fn put_topic(
    State(db): State<Shared>,
    Path(id): Path<Id>,
    Json(update): Json<TopicUpdate>,
) -> Result<Json<Topic>, (StatusCode, Json<serde_json::Value>)> {
    let mut db = db.lock().await;
    let mut topic = db.topic.clone().filter(|t| t.id == id).ok_or_else(missing)?;
    if let Some(title) = update.title {
        topic.title = title;
    }
    if update.category.is_some() {
        topic.category = update.category;
    }
    if update.content.is_some() {
        topic.content = update.content;
    }
    let next = db.versions.iter().map(|v| v.version).max().unwrap_or(0) + 1;
    db.versions.push(TopicVersion {
        id: next,
        topic_id: id,
        version: next,
        title: Some(topic.title.clone()),
        content: topic.content.clone(),
        category: topic.category.clone(),
        changed_by: "admin".to_owned(),
        change_reason: update.change_reason.unwrap_or_default(),
        created_at: "2024-03-02T09:00:00".to_owned(),
    });
    db.topic = Some(topic.clone());
    Ok(Json(topic))
}

async fn list_versions(State(db): State<Shared>, Path(id): Path<Id>) -> Json<Vec<TopicVersion>> {
    let db = db.lock().await;
    Json(db.versions.iter().filter(|v| v.topic_id == id).cloned().collect())
}

fn seeded() -> Backend {
    let topic: Topic = serde_json::from_value(json!({
        "id": 1,
        "title": "TCP 혼잡 제어 (개정)",
        "category": "네트워크",
        "content": "<p>새 내용</p>",
        "created_at": "2024-03-01T09:00:00",
        "updated_at": "2024-03-01T10:00:00"
    }))
    .unwrap();
    let v1: TopicVersion = serde_json::from_value(json!({
        "id": 1,
        "topic_id": 1,
        "version": 1,
        "title": "TCP 혼잡 제어",
        "content": "<p>원래 내용</p>",
        "category": "네트워크 기초",
        "changed_by": "admin",
        "change_reason": "최초 작성",
        "created_at": "2024-03-01T09:00:00"
    }))
    .unwrap();
    Backend { topic: Some(topic), versions: vec![v1] }
}

async fn spawn_backend(backend: Backend) -> (String, Shared) {
    let shared: Shared = Arc::new(Mutex::new(backend));
    let app = Router::new()
        .route("/api/topics/{id}", get(get_topic).put(put_topic))
        .route("/api/topics/{id}/versions", get(list_versions))
        .with_state(shared.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), shared)
}

#[tokio::test]
async fn restore_puts_snapshot_back_and_records_a_version() {
    let (base, _) = spawn_backend(seeded()).await;
    let client = ApiClient::new(base, Duration::from_secs(5)).unwrap();

    let before = client.topic_versions(1).await.unwrap();
    let snapshot = before.iter().find(|v| v.version == 1).cloned().unwrap();

    client.restore_topic_version(1, 1).await.unwrap();

    let topic = client.get_topic(1).await.unwrap();
    assert_eq!(Some(topic.title.clone()), snapshot.title);
    assert_eq!(topic.content, snapshot.content);
    assert_eq!(topic.category, snapshot.category);

    let after = client.topic_versions(1).await.unwrap();
    assert_eq!(after.len(), before.len() + 1);
    let newest = after.iter().max_by_key(|v| v.version).unwrap();
    assert_eq!(newest.change_reason, "버전 1 복원");
}

#[tokio::test]
async fn restore_of_unknown_version_leaves_topic_untouched() {
    let (base, shared) = spawn_backend(seeded()).await;
    let client = ApiClient::new(base, Duration::from_secs(5)).unwrap();

    let err = client.restore_topic_version(1, 9).await.unwrap_err();
    assert!(matches!(err, ApiError::VersionNotFound { topic_id: 1, version: 9 }));

    let db = shared.lock().await;
    assert_eq!(db.versions.len(), 1);
    assert_eq!(db.topic.as_ref().map(|t| t.title.as_str()), Some("TCP 혼잡 제어 (개정)"));
}

#[tokio::test]
async fn missing_topic_surfaces_backend_detail() {
    let (base, _) = spawn_backend(Backend::default()).await;
    let client = ApiClient::new(base, Duration::from_secs(5)).unwrap();

    let err = client.get_topic(42).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 404, detail: Some(ref d) } if d == "Topic not found"));
}
