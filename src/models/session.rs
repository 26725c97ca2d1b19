// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout session records: raw store documents, normalized sessions,
//! and new sessions submitted from the logging form.

use crate::models::exercise;
use crate::time_utils::parse_timestamp_value;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError, ValidationErrors};

/// Exercise name used when a record carries none.
pub const UNKNOWN_EXERCISE: &str = "Unknown";

/// A session document exactly as the store delivered it.
///
/// Every field is kept as an untyped JSON value so that decoding never
/// fails; interpretation happens in [`RawWorkoutRecord::normalize`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWorkoutRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub owner_id: Value,
    #[serde(default)]
    pub exercise_name: Value,
    /// Field name used by older documents
    #[serde(default)]
    pub exercise: Value,
    #[serde(default)]
    pub sets: Value,
    #[serde(default)]
    pub reps: Value,
    #[serde(default)]
    pub weight: Value,
    #[serde(default)]
    pub timestamp: Value,
    #[serde(default)]
    pub is_deleted: Value,
}

impl RawWorkoutRecord {
    /// Decode any JSON value. Non-objects become an all-defaults record.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Soft-deleted records carry the boolean `true`; nothing else counts.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted == Value::Bool(true)
    }

    pub fn id(&self) -> String {
        coerce_string(&self.id)
    }

    /// Resolve every field to a usable value.
    ///
    /// Numbers that cannot be read become 0, a missing exercise name becomes
    /// [`UNKNOWN_EXERCISE`], and an unreadable timestamp becomes `now`.
    /// Naive timestamps are read in `now`'s offset.
    pub fn normalize(&self, now: &DateTime<FixedOffset>) -> WorkoutSession {
        let exercise_name = non_blank(&self.exercise_name)
            .or_else(|| non_blank(&self.exercise))
            .unwrap_or(UNKNOWN_EXERCISE)
            .to_string();

        let timestamp = parse_timestamp_value(&self.timestamp, now.offset())
            .unwrap_or_else(|| now.with_timezone(&Utc));

        WorkoutSession {
            id: self.id(),
            owner_id: coerce_string(&self.owner_id),
            exercise_name,
            sets: coerce_number(&self.sets),
            reps: coerce_number(&self.reps),
            weight: coerce_number(&self.weight),
            timestamp,
            is_deleted: self.is_deleted(),
        }
    }
}

/// A normalized session, as shown in history and counted in stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: String,
    pub owner_id: String,
    pub exercise_name: String,
    pub sets: f64,
    pub reps: f64,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Coerce a loosely typed value to a finite number, falling back to 0.
///
/// Strings are trimmed and an empty string reads as 0; booleans read as
/// 1 or 0; null, arrays and objects read as 0. NaN and infinities never
/// escape.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

// ─── New Sessions ────────────────────────────────────────────

/// A session submitted from the logging form.
///
/// Numeric fields arrive as whatever the form inputs produced, usually
/// strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub exercise_name: String,
    #[serde(default)]
    pub sets: Value,
    #[serde(default)]
    pub reps: Value,
    #[serde(default)]
    pub weight: Value,
}

#[derive(Debug, Validate)]
struct SessionFields {
    #[validate(length(min = 1, message = "owner id is required"))]
    owner_id: String,
    #[validate(custom(function = "validate_catalog_name"))]
    exercise_name: String,
    #[validate(range(min = 1.0, message = "sets must be at least 1"))]
    sets: f64,
    #[validate(range(min = 1.0, message = "reps must be at least 1"))]
    reps: f64,
    #[validate(range(min = 0.0, message = "weight cannot be negative"))]
    weight: f64,
}

fn validate_catalog_name(name: &str) -> Result<(), ValidationError> {
    if exercise::find_by_name(name).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("unknown_exercise");
        err.message = Some("exercise is not in the catalog".into());
        Err(err)
    }
}

impl NewSession {
    /// Validate the form and build the document to write to the store.
    pub fn into_document(self, now: DateTime<Utc>) -> Result<SessionDocument, ValidationErrors> {
        let fields = SessionFields {
            owner_id: self.owner_id.trim().to_string(),
            exercise_name: self.exercise_name,
            sets: coerce_number(&self.sets),
            reps: coerce_number(&self.reps),
            weight: coerce_number(&self.weight),
        };
        fields.validate()?;

        Ok(SessionDocument {
            owner_id: fields.owner_id,
            exercise_name: fields.exercise_name,
            sets: fields.sets,
            reps: fields.reps,
            weight: fields.weight,
            timestamp: now,
            is_deleted: false,
        })
    }
}

/// A new session document, ready to be added to the `sessions` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    pub owner_id: String,
    pub exercise_name: String,
    pub sets: f64,
    pub reps: f64,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
    pub is_deleted: bool,
}
