// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout history: soft deletion against a snapshot.

use crate::error::{AppError, Result};
use crate::models::{aggregate, RawWorkoutRecord, WorkoutStats};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Partial update that soft-deletes a session document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct SoftDeletePatch {
    pub is_deleted: bool,
}

/// Outcome of soft-deleting one session.
#[derive(Debug, Clone)]
pub struct SoftDeleteOutcome {
    /// Update to apply to `sessions/{id}`
    pub patch: SoftDeletePatch,
    /// False if every copy was already deleted in the snapshot
    pub changed: bool,
    /// Stats recomputed as if the patch had been applied
    pub stats: WorkoutStats,
}

/// Soft-delete the session `id` within a snapshot.
///
/// Every copy of `id` in the snapshot is marked, since they all stand for
/// the one stored document the patch applies to. The snapshot itself is left
/// untouched. Deleting an already-deleted session succeeds without change; an
/// id absent from the snapshot is an error.
pub fn soft_delete(
    records: &[RawWorkoutRecord],
    id: &str,
    now: DateTime<FixedOffset>,
) -> Result<SoftDeleteOutcome> {
    let matches: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.id() == id)
        .map(|(i, _)| i)
        .collect();

    if matches.is_empty() {
        return Err(AppError::NotFound(format!("Session {} not found", id)));
    }

    let changed = matches.iter().any(|&i| !records[i].is_deleted());

    let mut updated = records.to_vec();
    for &i in &matches {
        updated[i].is_deleted = Value::Bool(true);
    }

    Ok(SoftDeleteOutcome {
        patch: SoftDeletePatch { is_deleted: true },
        changed,
        stats: aggregate(&updated, now),
    })
}
