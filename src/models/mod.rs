// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod exercise;
pub mod session;
pub mod stats;
pub mod user;

pub use exercise::{Category, Exercise};
pub use session::{NewSession, RawWorkoutRecord, SessionDocument, WorkoutSession};
pub use stats::{aggregate, WorkoutStats};
pub use user::{AccountDeletion, AccountStatus};
