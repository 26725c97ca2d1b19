// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Labels the dashboard and history views render.

use crate::models::{WorkoutSession, WorkoutStats};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Unit label shown next to weights. Values are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lbs,
    Kg,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Lbs => f.write_str("lbs"),
            WeightUnit::Kg => f.write_str("kg"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lbs" | "lb" => Ok(WeightUnit::Lbs),
            "kg" => Ok(WeightUnit::Kg),
            other => Err(format!("unknown weight unit: {}", other)),
        }
    }
}

/// Time-of-day greeting for the local hour.
pub fn greeting(now: &DateTime<FixedOffset>) -> &'static str {
    match now.hour() {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Name to greet the user by: display name, else the email's local part.
pub fn display_name(display_name: Option<&str>, email: Option<&str>) -> String {
    display_name
        .filter(|n| !n.is_empty())
        .or_else(|| {
            email
                .and_then(|e| e.split('@').next())
                .filter(|local| !local.is_empty())
        })
        .unwrap_or("User")
        .to_string()
}

/// Short date of the last session, e.g. "Oct 18", or "N/A".
pub fn last_active_label(last_active: Option<DateTime<Utc>>, offset: &FixedOffset) -> String {
    match last_active {
        Some(at) => at.with_timezone(offset).format("%b %-d").to_string(),
        None => "N/A".to_string(),
    }
}

pub fn streak_label(days: u32) -> String {
    if days == 1 {
        "1 Day".to_string()
    } else {
        format!("{} Days", days)
    }
}

/// Full date and time for a history entry, e.g. "October 18, 2026 • 3:05 PM".
pub fn session_time_label(at: DateTime<Utc>, offset: &FixedOffset) -> String {
    at.with_timezone(offset)
        .format("%B %-d, %Y • %-I:%M %p")
        .to_string()
}

/// Weight with its unit label, e.g. "45.5 lbs". Whole numbers print without
/// a fractional part.
pub fn weight_label(weight: f64, unit: WeightUnit) -> String {
    format!("{} {}", format_number(weight), unit)
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Home view summary.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub greeting: String,
    pub user_name: String,
    pub total_workouts: u32,
    pub streak_label: String,
    pub last_active_label: String,
}

impl DashboardSummary {
    pub fn build(
        stats: &WorkoutStats,
        now: &DateTime<FixedOffset>,
        user_display_name: Option<&str>,
        email: Option<&str>,
    ) -> Self {
        Self {
            greeting: greeting(now).to_string(),
            user_name: display_name(user_display_name, email),
            total_workouts: stats.total_count,
            streak_label: streak_label(stats.streak_days),
            last_active_label: last_active_label(stats.last_active, now.offset()),
        }
    }
}

/// One row of the history view.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub exercise_name: String,
    pub time_label: String,
    pub sets: f64,
    pub reps: f64,
    pub weight: f64,
    pub weight_label: String,
}

impl HistoryEntry {
    pub fn from_session(session: &WorkoutSession, offset: &FixedOffset, unit: WeightUnit) -> Self {
        Self {
            id: session.id.clone(),
            exercise_name: session.exercise_name.clone(),
            time_label: session_time_label(session.timestamp, offset),
            sets: session.sets,
            reps: session.reps,
            weight: session.weight,
            weight_label: weight_label(session.weight, unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn test_greeting_boundaries() {
        let tz = offset(0);
        let at = |h| tz.with_ymd_and_hms(2026, 10, 18, h, 0, 0).unwrap();
        assert_eq!(greeting(&at(0)), "Good Morning");
        assert_eq!(greeting(&at(11)), "Good Morning");
        assert_eq!(greeting(&at(12)), "Good Afternoon");
        assert_eq!(greeting(&at(17)), "Good Afternoon");
        assert_eq!(greeting(&at(18)), "Good Evening");
        assert_eq!(greeting(&at(23)), "Good Evening");
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(display_name(Some("Sam"), Some("x@y.z")), "Sam");
        assert_eq!(display_name(Some(""), Some("jordan@example.com")), "jordan");
        assert_eq!(display_name(None, Some("@example.com")), "User");
        assert_eq!(display_name(None, None), "User");
    }

    #[test]
    fn test_last_active_label() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 23, 30, 0).unwrap();
        assert_eq!(last_active_label(Some(at), &offset(0)), "Oct 18");
        assert_eq!(last_active_label(Some(at), &offset(2)), "Oct 19");
        assert_eq!(last_active_label(None, &offset(0)), "N/A");
    }

    #[test]
    fn test_streak_label() {
        assert_eq!(streak_label(0), "0 Days");
        assert_eq!(streak_label(1), "1 Day");
        assert_eq!(streak_label(3), "3 Days");
    }

    #[test]
    fn test_session_time_label() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 15, 5, 0).unwrap();
        assert_eq!(
            session_time_label(at, &offset(0)),
            "October 18, 2026 • 3:05 PM"
        );
        assert_eq!(
            session_time_label(at, &offset(-15)),
            "October 18, 2026 • 12:05 AM"
        );
    }

    #[test]
    fn test_weight_label() {
        assert_eq!(weight_label(45.0, WeightUnit::Lbs), "45 lbs");
        assert_eq!(weight_label(22.5, WeightUnit::Kg), "22.5 kg");
        assert_eq!(weight_label(0.0, WeightUnit::Kg), "0 kg");
    }

    #[test]
    fn test_weight_unit_from_str() {
        assert_eq!("LBS".parse::<WeightUnit>(), Ok(WeightUnit::Lbs));
        assert_eq!(" kg ".parse::<WeightUnit>(), Ok(WeightUnit::Kg));
        assert!("stone".parse::<WeightUnit>().is_err());
    }
}
