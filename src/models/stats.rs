// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout statistics derived from a snapshot of a user's sessions.
//!
//! Nothing here is stored: stats are recomputed from each fresh snapshot
//! the client fetches, with the current time passed in explicitly.

use crate::models::session::{RawWorkoutRecord, WorkoutSession};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stats for one user's active (not soft-deleted) sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Active sessions, newest first
    pub active_sessions: Vec<WorkoutSession>,
    pub total_count: u32,
    /// Timestamp of the newest active session
    pub last_active: Option<DateTime<Utc>>,
    /// Consecutive days with a session, ending today or yesterday
    pub streak_days: u32,
}

/// Aggregate a snapshot of one user's records.
///
/// Soft-deleted records are dropped and the rest are normalized and sorted
/// newest first (stable, so equal timestamps keep input order). Calendar
/// days for the streak are taken in `now`'s offset.
pub fn aggregate(records: &[RawWorkoutRecord], now: DateTime<FixedOffset>) -> WorkoutStats {
    let mut active_sessions: Vec<WorkoutSession> = records
        .iter()
        .filter(|r| !r.is_deleted())
        .map(|r| r.normalize(&now))
        .collect();

    active_sessions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let offset = *now.offset();
    let dates: HashSet<NaiveDate> = active_sessions
        .iter()
        .map(|s| s.timestamp.with_timezone(&offset).date_naive())
        .collect();

    WorkoutStats {
        total_count: u32::try_from(active_sessions.len()).unwrap_or(u32::MAX),
        last_active: active_sessions.first().map(|s| s.timestamp),
        streak_days: compute_streak(&dates, now.date_naive()),
        active_sessions,
    }
}

/// Count consecutive days with activity, ending today or yesterday.
///
/// A day without a session yet does not break the streak until it is over,
/// so counting starts from yesterday when today is missing.
pub fn compute_streak(dates: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let start = if dates.contains(&today) {
        Some(today)
    } else {
        today.pred_opt().filter(|yesterday| dates.contains(yesterday))
    };

    let mut streak = 0;
    let mut current = start;
    while let Some(day) = current.filter(|d| dates.contains(d)) {
        streak += 1;
        current = day.pred_opt();
    }

    streak
}
