// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed exercise catalog.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Exercise category, in the order the workout view shows its tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Upper,
    Abs,
    Legs,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Upper, Category::Abs, Category::Legs];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Category::Upper => "Upper Body",
            Category::Abs => "Abs",
            Category::Legs => "Legs",
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    /// Stable slug (e.g., "pushups")
    pub id: &'static str,
    /// Display name, stored as `exerciseName` on logged sessions
    pub name: &'static str,
    pub category: Category,
}

const fn exercise(id: &'static str, name: &'static str, category: Category) -> Exercise {
    Exercise { id, name, category }
}

/// Every exercise a session can be logged against, grouped by category.
pub const EXERCISES: [Exercise; 9] = [
    exercise("pushups", "Push-ups", Category::Upper),
    exercise("arm-circles", "Arm Circles", Category::Upper),
    exercise("plank-taps", "Plank Shoulder Taps", Category::Upper),
    exercise("situps", "Sit-Ups", Category::Abs),
    exercise("leg-raises", "Leg Raises", Category::Abs),
    exercise("plank-hold", "Plank Hold", Category::Abs),
    exercise("squats", "Squats", Category::Legs),
    exercise("lunges", "Lunges", Category::Legs),
    exercise("calf-raises", "Calf Raises", Category::Legs),
];

/// Exercises in one category, in catalog order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Exercise> {
    EXERCISES.iter().filter(move |e| e.category == category)
}

pub fn find_by_id(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

pub fn find_by_name(name: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_three_per_category() {
        for category in Category::ALL {
            assert_eq!(by_category(category).count(), 3, "{}", category.label());
        }
    }

    #[test]
    fn test_ids_and_names_unique() {
        let ids: HashSet<_> = EXERCISES.iter().map(|e| e.id).collect();
        let names: HashSet<_> = EXERCISES.iter().map(|e| e.name).collect();
        assert_eq!(ids.len(), EXERCISES.len());
        assert_eq!(names.len(), EXERCISES.len());
    }

    #[test]
    fn test_lookups() {
        assert_eq!(find_by_id("plank-hold").map(|e| e.name), Some("Plank Hold"));
        assert_eq!(
            find_by_name("Calf Raises").map(|e| e.category),
            Some(Category::Legs)
        );
        assert!(find_by_name("push-ups").is_none());
        assert!(find_by_id("Push-ups").is_none());
    }
}
