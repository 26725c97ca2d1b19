// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - presentation and workflow logic on top of the models.

pub mod dashboard;
pub mod history;
pub mod timer;

pub use dashboard::{DashboardSummary, HistoryEntry, WeightUnit};
pub use history::{soft_delete, SoftDeleteOutcome, SoftDeletePatch};
pub use timer::WorkoutTimer;
