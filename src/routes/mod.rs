// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod api;

use crate::AppState;
use axum::http::{header, request::Parts, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Build identifier baked in at compile time, if the build set one.
const BUILD_ID: Option<&str> = option_env!("BUILD_ID");

/// Hosts the web client is served from during local development.
const DEV_ORIGINS: [&str; 2] = ["http://localhost", "http://127.0.0.1"];

/// Liveness check; touches no state.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id: BUILD_ID.unwrap_or("unknown").to_string(),
    })
}

/// Whether a browser `Origin` may call the API: the configured frontend, or a
/// dev server on localhost at any port.
pub fn is_allowed_origin(origin: &str, frontend_url: &str) -> bool {
    if origin == frontend_url {
        return true;
    }
    DEV_ORIGINS.iter().any(|host| match origin.strip_prefix(host) {
        Some(rest) => rest.is_empty() || rest.starts_with(':'),
        None => false,
    })
}

/// Requests carry no cookies or auth headers, so credentials stay disabled
/// and only the JSON request headers are allowed.
fn cors_layer(frontend_url: String) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
            origin
                .to_str()
                .map(|o| is_allowed_origin(o, &frontend_url))
                .unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.frontend_url.clone());

    Router::new()
        .route("/health", get(health_check))
        .merge(api::routes())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONTEND: &str = "https://getmoving.example.com";

    #[test]
    fn test_frontend_and_dev_origins_allowed() {
        assert!(is_allowed_origin(FRONTEND, FRONTEND));
        assert!(is_allowed_origin("http://localhost", FRONTEND));
        assert!(is_allowed_origin("http://localhost:5173", FRONTEND));
        assert!(is_allowed_origin("http://127.0.0.1:8080", FRONTEND));
    }

    #[test]
    fn test_lookalike_origins_rejected() {
        assert!(!is_allowed_origin("https://evil.example.com", FRONTEND));
        assert!(!is_allowed_origin("http://localhost.evil.com", FRONTEND));
        assert!(!is_allowed_origin("http://127.0.0.1.nip.io", FRONTEND));
        assert!(!is_allowed_origin("https://getmoving.example.com.evil", FRONTEND));
        assert!(!is_allowed_origin("", FRONTEND));
    }
}
