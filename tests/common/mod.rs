// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use getmoving_stats::config::Config;
use getmoving_stats::routes::create_router;
use getmoving_stats::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Fixed "now" used by API tests: midday UTC on 2026-10-18.
#[allow(dead_code)]
pub const NOW: &str = "2026-10-18T12:00:00Z";

/// Create a test app with default test configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState { config });
    (create_router(state.clone()), state)
}

/// POST a JSON body and return the status and parsed response body.
#[allow(dead_code)]
pub async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// A session document dated `days_ago` days before [`NOW`], at 09:00 UTC.
#[allow(dead_code)]
pub fn session_doc(id: &str, days_ago: i64) -> Value {
    let at = chrono::DateTime::parse_from_rfc3339("2026-10-18T09:00:00Z").unwrap()
        - chrono::Duration::days(days_ago);
    serde_json::json!({
        "id": id,
        "ownerId": "user-1",
        "exerciseName": "Squats",
        "sets": 3,
        "reps": 10,
        "weight": 45,
        "timestamp": at.to_rfc3339(),
        "isDeleted": false
    })
}
