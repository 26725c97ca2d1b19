// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes.
//!
//! Handlers are stateless: the client sends the snapshot it fetched from its
//! store and gets back derived data or the documents/patches to write.

use crate::config::offset_from_minutes;
use crate::error::{AppError, Result};
use crate::models::exercise::{self, Category, Exercise};
use crate::models::{
    aggregate, AccountDeletion, NewSession, RawWorkoutRecord, SessionDocument, WorkoutStats,
};
use crate::services::dashboard::{DashboardSummary, HistoryEntry, WeightUnit};
use crate::services::history::{soft_delete, SoftDeletePatch};
use crate::time_utils::parse_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercises", get(get_exercises))
        .route("/api/stats", post(post_stats))
        .route("/api/history", post(post_history))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}/delete", post(delete_session))
        .route("/api/account/delete", post(delete_account))
}

// ─── Request Context ─────────────────────────────────────────

/// A snapshot of one user's session documents plus the caller's clock.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRequest {
    /// Raw session documents, as fetched
    #[serde(default)]
    pub records: Vec<Value>,
    /// Caller's local UTC offset, east-positive (120 for UTC+2)
    pub utc_offset_minutes: Option<i32>,
    /// Current time (RFC3339); the server clock is used if absent
    pub now: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl SnapshotRequest {
    fn raw_records(&self) -> Vec<RawWorkoutRecord> {
        self.records
            .iter()
            .cloned()
            .map(RawWorkoutRecord::from_value)
            .collect()
    }
}

/// Resolve the request's "now" in the caller's local offset.
fn resolve_now(
    state: &AppState,
    utc_offset_minutes: Option<i32>,
    now: Option<&str>,
) -> Result<DateTime<FixedOffset>> {
    let offset = match utc_offset_minutes {
        Some(minutes) => offset_from_minutes(minutes).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid 'utcOffsetMinutes': {}", minutes))
        })?,
        None => state.config.default_utc_offset,
    };

    let instant = match now {
        Some(raw) => parse_rfc3339(raw).ok_or_else(|| {
            AppError::BadRequest("Invalid 'now' parameter: must be RFC3339 datetime".to_string())
        })?,
        None => Utc::now(),
    };

    Ok(instant.with_timezone(&offset))
}

// ─── Exercise Catalog ────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryGroup {
    pub id: Category,
    pub label: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExercisesResponse {
    pub categories: Vec<CategoryGroup>,
}

async fn get_exercises() -> Json<ExercisesResponse> {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryGroup {
            id: category,
            label: category.label().to_string(),
            exercises: exercise::by_category(category).copied().collect(),
        })
        .collect();

    Json(ExercisesResponse { categories })
}

// ─── Stats ───────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsResponse {
    pub stats: WorkoutStats,
    pub dashboard: DashboardSummary,
}

/// Aggregate a snapshot into stats and home view labels.
async fn post_stats(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SnapshotRequest>,
) -> Result<Json<StatsResponse>> {
    let now = resolve_now(&state, request.utc_offset_minutes, request.now.as_deref())?;
    let records = request.raw_records();
    let stats = aggregate(&records, now);

    tracing::debug!(
        records = records.len(),
        active = stats.total_count,
        streak = stats.streak_days,
        "Aggregated workout stats"
    );

    let dashboard = DashboardSummary::build(
        &stats,
        &now,
        request.display_name.as_deref(),
        request.email.as_deref(),
    );

    Ok(Json(StatsResponse { stats, dashboard }))
}

// ─── History ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    /// Active sessions, newest first
    pub entries: Vec<HistoryEntry>,
    pub total_count: u32,
    pub weight_unit: WeightUnit,
}

async fn post_history(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SnapshotRequest>,
) -> Result<Json<HistoryResponse>> {
    let now = resolve_now(&state, request.utc_offset_minutes, request.now.as_deref())?;
    let stats = aggregate(&request.raw_records(), now);
    let unit = state.config.weight_unit;

    let entries = stats
        .active_sessions
        .iter()
        .map(|s| HistoryEntry::from_session(s, now.offset(), unit))
        .collect();

    Ok(Json(HistoryResponse {
        entries,
        total_count: stats.total_count,
        weight_unit: unit,
    }))
}

// ─── Sessions ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CreateSessionRequest {
    #[serde(flatten)]
    session: NewSession,
    now: Option<String>,
}

/// Validate a logged session and return the document to store.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionDocument>> {
    let now = resolve_now(&state, None, request.now.as_deref())?;
    let document = request.session.into_document(now.with_timezone(&Utc))?;

    tracing::info!(
        owner_id = %document.owner_id,
        exercise = %document.exercise_name,
        "Prepared new session document"
    );

    Ok(Json(document))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SoftDeleteResponse {
    pub id: String,
    pub patch: SoftDeletePatch,
    pub changed: bool,
    pub stats: WorkoutStats,
}

/// Soft-delete a session and return the patch plus refreshed stats.
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<SnapshotRequest>,
) -> Result<Json<SoftDeleteResponse>> {
    let now = resolve_now(&state, request.utc_offset_minutes, request.now.as_deref())?;
    let outcome = soft_delete(&request.raw_records(), &id, now)?;

    if outcome.changed {
        tracing::info!(session_id = %id, "Session soft-deleted");
    } else {
        tracing::debug!(session_id = %id, "Session already deleted (idempotent skip)");
    }

    Ok(Json(SoftDeleteResponse {
        id,
        patch: outcome.patch,
        changed: outcome.changed,
        stats: outcome.stats,
    }))
}

// ─── Account Deletion ────────────────────────────────────────

#[derive(Deserialize)]
struct DeleteAccountRequest {
    #[serde(default)]
    confirmation: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DeleteAccountResponse {
    pub patch: AccountDeletion,
    pub message: String,
}

/// Confirm account deletion and return the user document patch.
async fn delete_account(
    Json(request): Json<DeleteAccountRequest>,
) -> Result<Json<DeleteAccountResponse>> {
    let patch = AccountDeletion::confirm(&request.confirmation)
        .ok_or_else(|| AppError::BadRequest("Account deletion cancelled".to_string()))?;

    tracing::info!("User-initiated account deletion confirmed");

    Ok(Json(DeleteAccountResponse {
        patch,
        message: "Account marked for deletion. You will be logged out.".to_string(),
    }))
}
