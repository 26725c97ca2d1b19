// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GetMoving stats: workout statistics for the GetMoving fitness tracker.
//!
//! The web client keeps its sessions in a managed document store. This crate
//! turns snapshots of those documents into dashboard stats (workout count,
//! day streak, last active date) and history views, and validates what the
//! client is about to write back.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
