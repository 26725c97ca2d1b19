// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout stopwatch shown during an active session.
//!
//! The timer holds no clock of its own; the caller drives it with one
//! `tick` per elapsed second.

/// Seconds between motivational message changes.
pub const MESSAGE_INTERVAL_SECS: u64 = 15;

/// Progress bar period: fills over one minute, then starts again.
const PROGRESS_PERIOD_SECS: i64 = 60;

pub const MOTIVATIONAL_MESSAGES: [&str; 8] = [
    "You're doing great! Keep pushing!",
    "Every rep counts! Stay focused!",
    "Feel the burn! You're getting stronger!",
    "Don't give up! You've got this!",
    "Push through the pain! Success is near!",
    "Your future self will thank you!",
    "Consistency is key! Keep going!",
    "You're stronger than you think!",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutTimer {
    seconds: i64,
    running: bool,
}

impl WorkoutTimer {
    /// Timer starting from `initial_seconds`, stopped.
    pub fn new(initial_seconds: i64) -> Self {
        Self {
            seconds: initial_seconds,
            running: false,
        }
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or resume. A negative count is clamped to zero first.
    pub fn start(&mut self) {
        if self.seconds < 0 {
            self.seconds = 0;
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and return to zero.
    pub fn reset(&mut self) {
        self.running = false;
        self.seconds = 0;
    }

    /// Advance one second if running.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    /// `MM:SS`, with minutes growing past two digits as needed.
    pub fn formatted(&self) -> String {
        let total = self.seconds.max(0);
        format!("{:02}:{:02}", total / 60, total % 60)
    }

    /// Progress bar fill, 0 up to (not including) 100.
    pub fn progress_percent(&self) -> f64 {
        (self.seconds.rem_euclid(PROGRESS_PERIOD_SECS) as f64 / PROGRESS_PERIOD_SECS as f64) * 100.0
    }

    pub fn status_text(&self) -> String {
        if self.seconds == 0 {
            "Ready to start!".to_string()
        } else {
            format!("{} seconds elapsed", self.seconds)
        }
    }
}

/// Message shown after `elapsed_secs` on the workout screen.
///
/// Messages rotate on wall time since the screen opened, independent of
/// whether the timer is running.
pub fn motivational_message(elapsed_secs: u64) -> &'static str {
    let index = (elapsed_secs / MESSAGE_INTERVAL_SECS) as usize % MOTIVATIONAL_MESSAGES.len();
    MOTIVATIONAL_MESSAGES[index]
}
