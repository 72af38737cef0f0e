// ABOUTME: Static workout catalog data with levels, intensity, and focus areas
// ABOUTME: Read-only workout entries used by the recommendation selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Workout catalog data.
//!
//! Read-only at runtime. The `locked` flag gates premium cards in the display
//! layer; it is not an access-control mechanism.

use serde::{Deserialize, Serialize};

/// Difficulty level of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutLevel {
    /// New to training
    Beginner,
    /// Comfortable with fundamentals
    Intermediate,
    /// Experienced trainee
    Advanced,
    /// Suitable for everyone
    AllLevels,
}

impl WorkoutLevel {
    /// Canonical display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::AllLevels => "All Levels",
        }
    }
}

/// Workout intensity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    /// Conversational pace
    Low,
    /// Elevated effort
    Medium,
    /// Near-maximal effort
    High,
}

impl Intensity {
    /// Canonical display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A workout recommendation card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutEntry {
    /// Display title
    pub title: &'static str,
    /// Difficulty level
    pub level: WorkoutLevel,
    /// Session length (minutes)
    pub duration_minutes: i32,
    /// Intensity bucket
    pub intensity: Intensity,
    /// Estimated energy burned (kcal)
    pub calories_burned: i32,
    /// Focus areas, in display order
    pub body_focus: &'static [&'static str],
    /// Workout style, matched case-insensitively by type filters
    pub workout_type: &'static str,
    /// Benefit bullet points, in display order
    pub benefits: &'static [&'static str],
    /// Premium gating flag for the display layer
    pub locked: bool,
}

/// The full workout catalog, in display order
pub const WORKOUTS: &[WorkoutEntry] = &[
    WorkoutEntry {
        title: "Full Body Strength",
        level: WorkoutLevel::Beginner,
        duration_minutes: 30,
        intensity: Intensity::Medium,
        calories_burned: 250,
        body_focus: &["Full Body", "Strength"],
        workout_type: "Strength",
        benefits: &["Builds foundational strength", "Improves posture"],
        locked: false,
    },
    WorkoutEntry {
        title: "HIIT Cardio Blast",
        level: WorkoutLevel::Intermediate,
        duration_minutes: 20,
        intensity: Intensity::High,
        calories_burned: 300,
        body_focus: &["Cardio", "Fat Loss"],
        workout_type: "HIIT",
        benefits: &["Maximizes calorie burn", "Boosts conditioning"],
        locked: false,
    },
    WorkoutEntry {
        title: "Upper Body Focus",
        level: WorkoutLevel::Intermediate,
        duration_minutes: 40,
        intensity: Intensity::Medium,
        calories_burned: 280,
        body_focus: &["Arms", "Chest", "Back"],
        workout_type: "Strength",
        benefits: &["Builds pressing and pulling strength", "Balanced upper-body development"],
        locked: true,
    },
    WorkoutEntry {
        title: "Lower Body & Core",
        level: WorkoutLevel::Beginner,
        duration_minutes: 35,
        intensity: Intensity::Low,
        calories_burned: 220,
        body_focus: &["Legs", "Glutes", "Core"],
        workout_type: "Strength",
        benefits: &["Strengthens the posterior chain", "Improves core stability"],
        locked: true,
    },
    WorkoutEntry {
        title: "Morning Mobility Flow",
        level: WorkoutLevel::AllLevels,
        duration_minutes: 15,
        intensity: Intensity::Low,
        calories_burned: 90,
        body_focus: &["Hips", "Spine", "Shoulders"],
        workout_type: "Mobility",
        benefits: &["Eases morning stiffness", "Prepares joints for the day"],
        locked: false,
    },
    WorkoutEntry {
        title: "Power Yoga",
        level: WorkoutLevel::Intermediate,
        duration_minutes: 45,
        intensity: Intensity::Medium,
        calories_burned: 240,
        body_focus: &["Full Body", "Balance"],
        workout_type: "Yoga",
        benefits: &["Builds flexible strength", "Improves breath control"],
        locked: false,
    },
    WorkoutEntry {
        title: "Sprint Intervals",
        level: WorkoutLevel::Advanced,
        duration_minutes: 25,
        intensity: Intensity::High,
        calories_burned: 350,
        body_focus: &["Cardio", "Legs"],
        workout_type: "Cardio",
        benefits: &["Raises anaerobic capacity", "Time-efficient conditioning"],
        locked: false,
    },
    WorkoutEntry {
        title: "Core Crusher",
        level: WorkoutLevel::Intermediate,
        duration_minutes: 20,
        intensity: Intensity::Medium,
        calories_burned: 180,
        body_focus: &["Core", "Obliques"],
        workout_type: "Strength",
        benefits: &["Strengthens the trunk", "Supports heavy lifts"],
        locked: false,
    },
    WorkoutEntry {
        title: "Steady State Cycling",
        level: WorkoutLevel::AllLevels,
        duration_minutes: 60,
        intensity: Intensity::Low,
        calories_burned: 420,
        body_focus: &["Cardio", "Legs"],
        workout_type: "Cardio",
        benefits: &["Builds the aerobic base", "Low joint impact"],
        locked: false,
    },
    WorkoutEntry {
        title: "Pilates Fundamentals",
        level: WorkoutLevel::Beginner,
        duration_minutes: 30,
        intensity: Intensity::Low,
        calories_burned: 150,
        body_focus: &["Core", "Posture"],
        workout_type: "Pilates",
        benefits: &["Improves body control", "Gentle on the back"],
        locked: true,
    },
];
