// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::services::dashboard::WeightUnit;
use chrono::{FixedOffset, Offset, Utc};
use std::env;

/// Largest UTC offset accepted, in minutes (inclusive): ±18h, the ISO 8601
/// bound.
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL, allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Local offset used when a request does not send `utcOffsetMinutes`
    pub default_utc_offset: FixedOffset,
    /// Unit label shown next to weights (no conversion is ever applied)
    pub weight_unit: WeightUnit,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            default_utc_offset: utc(),
            weight_unit: WeightUnit::Lbs,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present. Every variable is optional;
    /// present-but-invalid values are rejected rather than silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        let default_utc_offset = match env::var("DEFAULT_UTC_OFFSET_MINUTES") {
            Ok(raw) => raw
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(offset_from_minutes)
                .ok_or(ConfigError::Invalid("DEFAULT_UTC_OFFSET_MINUTES", raw))?,
            Err(_) => utc(),
        };

        let weight_unit = match env::var("WEIGHT_UNIT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("WEIGHT_UNIT", raw))?,
            Err(_) => WeightUnit::Lbs,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
            default_utc_offset,
            weight_unit,
        })
    }
}

/// Build an east-positive UTC offset from minutes, e.g. `120` for UTC+2.
///
/// Returns `None` outside ±18h.
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(minutes * 60)
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
