// ABOUTME: Main library entry point for the AptEats nutrition and training engine
// ABOUTME: Provides energy estimation, recommendation selection, and session timing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

#![deny(unsafe_code)]

//! # AptEats Engine
//!
//! The core engine behind the AptEats fitness app: daily calorie estimation,
//! meal and workout recommendation selection, and countdown session timing.
//!
//! ## Features
//!
//! - **Energy estimation**: Mifflin-St Jeor BMR, activity-scaled TDEE, and
//!   goal-adjusted daily calorie targets
//! - **Recommendation selection**: filtered, goal-ranked, and shuffled views
//!   over the static meal and workout catalogs
//! - **Daily plans**: pre-authored four-slot plans picked per calorie band,
//!   with live-computed totals
//! - **Session timer**: a pure countdown state machine driven by a cancelable
//!   one-second tokio tick task
//!
//! ## Example Usage
//!
//! ```rust
//! use apteats_engine::config::EngineConfig;
//! use apteats_engine::errors::AppResult;
//! use apteats_engine::estimator::{estimate_daily_target, ActivityLevel, BiometricInput, Goal, Sex};
//! use apteats_engine::selector::{MealFilter, RecommendationSelector};
//!
//! fn main() -> AppResult<()> {
//!     let config = EngineConfig::default();
//!     let input = BiometricInput {
//!         age_years: 30,
//!         weight_kg: 80.0,
//!         height_cm: 180.0,
//!         sex: Sex::Male,
//!         activity_level: ActivityLevel::Moderate,
//!         goal: Goal::Maintain,
//!     };
//!     let estimate = estimate_daily_target(&input, &config)?;
//!     println!("daily target: {} kcal", estimate.target_calories);
//!
//!     let selector = RecommendationSelector::new(config)?;
//!     let meals = selector.display_meals(MealFilter::HighProtein, Some(&estimate));
//!     println!("showing {} meals", meals.len());
//!     Ok(())
//! }
//! ```

/// Static meal, workout, and daily plan catalogs with band-aware assembly
pub mod catalog;

/// Engine configuration: formula coefficients, activity factors, calorie
/// bands, and display limits
pub mod config;

/// Error types and error code system
pub mod errors;

/// Biometric inputs and daily calorie target estimation
pub mod estimator;

/// Filtering, ranking, shuffling, and daily plan selection
pub mod selector;

/// Countdown session timer
pub mod timer;

pub use config::EngineConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use estimator::{
    estimate_daily_target, ActivityLevel, BiometricForm, BiometricInput, EnergyEstimate, Goal, Sex,
};
pub use selector::{DailyPlan, MealFilter, RecommendationSelector, WorkoutFilter};
pub use timer::{Countdown, SessionTimer, TickOutcome, TimerPhase, TimerSnapshot};
