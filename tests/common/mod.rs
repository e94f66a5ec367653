//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use passport_hub::domain::AlgorithmCatalog;
use passport_hub::infra::{
    CertificationService, PassportStore, QueryService, SqlitePassportStore,
};
use passport_hub::server::{build_router, AppState};
use passport_hub::{WipeReport, WipeStatus};

/// Fresh in-memory store. A pooled `:memory:` database is per-connection,
/// so the pool is pinned to a single connection.
pub async fn memory_store() -> SqlitePassportStore {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("in-memory pool");
    passport_hub::migrations::run_sqlite(&pool)
        .await
        .expect("migrations");
    SqlitePassportStore::new(pool)
}

/// Full application state over a fresh in-memory store.
pub async fn test_state() -> AppState {
    let store: Arc<dyn PassportStore> = Arc::new(memory_store().await);
    AppState {
        certification: Arc::new(CertificationService::new(store.clone())),
        query: Arc::new(QueryService::new(store)),
        catalog: Arc::new(AlgorithmCatalog::builtin()),
    }
}

/// Full application router over a fresh in-memory store.
pub async fn test_app() -> Router {
    build_router().with_state(test_state().await)
}

/// A report that passes all certification rules.
pub fn success_report(device_id: &str) -> WipeReport {
    WipeReport {
        device_id: device_id.to_string(),
        wipe_status: WipeStatus::Success,
        wipe_standard: "NIST SP 800-88 Purge".to_string(),
        verification_log: None,
    }
}

/// Send a request through the router and decode the JSON response body.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}
