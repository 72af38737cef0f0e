// ABOUTME: Recommendation selector over the meal and workout catalogs
// ABOUTME: Filter predicates, goal-based ranking, uniform shuffle, and daily plan selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Recommendation Selector
//!
//! Consumes an optional [`EnergyEstimate`] and a user-chosen filter, and
//! produces the bounded display lists and the daily plan. All operations are
//! total: an empty result is a valid output, not an error.
//!
//! Randomized operations take a caller-supplied RNG so tests can drive them
//! deterministically with a seeded generator. The shuffle is Fisher-Yates
//! (via `rand::seq::SliceRandom`), which is uniform by construction.

use crate::catalog::{
    plans::STANDARD_PLANS, plans_for_band, workouts::WORKOUTS, CalorieBand, DailyPlanTemplate,
    Intensity, MealCatalog, MealEntry, MealType, PlanEntry, WorkoutEntry, WorkoutLevel,
};
use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::estimator::{EnergyEstimate, Goal};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

/// Minimum protein for the high-protein filter (g)
pub const HIGH_PROTEIN_MIN_G: i32 = 20;

/// Maximum carbs for the low-carb filter (g)
pub const LOW_CARB_MAX_G: i32 = 30;

/// Maximum prep time for the quick meal filter (minutes)
pub const QUICK_PREP_MAX_MINUTES: i32 = 15;

/// Maximum duration for the quick workout filter (minutes)
pub const QUICK_WORKOUT_MAX_MINUTES: i32 = 30;

/// Tags that satisfy the plant-based filter
const PLANT_BASED_TAGS: [&str; 3] = ["Vegan", "Plant-Based", "Vegetarian"];

/// Meal display filter; exactly one is active at a time, default [`Self::All`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealFilter {
    /// No filtering
    All,
    /// Match one meal category
    MealType(MealType),
    /// Protein at or above [`HIGH_PROTEIN_MIN_G`]
    HighProtein,
    /// Carbs at or below [`LOW_CARB_MAX_G`]
    LowCarb,
    /// Tags intersect the plant-based set
    PlantBased,
    /// Prep time at or below [`QUICK_PREP_MAX_MINUTES`]
    Quick,
}

impl Default for MealFilter {
    fn default() -> Self {
        Self::All
    }
}

impl MealFilter {
    /// Parse a filter name from the UI, case-insensitively
    ///
    /// Returns `None` for names that are not meal filters.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "breakfast" => Some(Self::MealType(MealType::Breakfast)),
            "lunch" => Some(Self::MealType(MealType::Lunch)),
            "dinner" => Some(Self::MealType(MealType::Dinner)),
            "snack" => Some(Self::MealType(MealType::Snack)),
            "high-protein" => Some(Self::HighProtein),
            "low-carb" => Some(Self::LowCarb),
            "plant-based" => Some(Self::PlantBased),
            "quick" => Some(Self::Quick),
            _ => None,
        }
    }

    /// Whether a meal entry passes this filter
    #[must_use]
    pub fn matches(&self, entry: &MealEntry) -> bool {
        match self {
            Self::All => true,
            Self::MealType(meal_type) => entry.meal_type == *meal_type,
            Self::HighProtein => entry.protein_g >= HIGH_PROTEIN_MIN_G,
            Self::LowCarb => entry.carbs_g <= LOW_CARB_MAX_G,
            Self::PlantBased => entry
                .tags
                .iter()
                .any(|tag| PLANT_BASED_TAGS.contains(tag)),
            Self::Quick => entry.prep_time_minutes <= QUICK_PREP_MAX_MINUTES,
        }
    }
}

/// Workout display filter
///
/// Intensity and workout-type names match case-insensitively; a level filter
/// matches the canonical level exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutFilter {
    /// No filtering
    All,
    /// Match one difficulty level
    Level(WorkoutLevel),
    /// Match one intensity bucket
    Intensity(Intensity),
    /// Duration at or below [`QUICK_WORKOUT_MAX_MINUTES`]
    Quick,
    /// Match a workout style by name
    WorkoutType(String),
}

impl Default for WorkoutFilter {
    fn default() -> Self {
        Self::All
    }
}

impl WorkoutFilter {
    /// Parse a filter name from the UI, case-insensitively
    ///
    /// Names that are not a known level, intensity, or keyword are treated as
    /// workout-type filters, so parsing is total.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "all" => Self::All,
            "beginner" => Self::Level(WorkoutLevel::Beginner),
            "intermediate" => Self::Level(WorkoutLevel::Intermediate),
            "advanced" => Self::Level(WorkoutLevel::Advanced),
            "low" => Self::Intensity(Intensity::Low),
            "medium" => Self::Intensity(Intensity::Medium),
            "high" => Self::Intensity(Intensity::High),
            "quick" => Self::Quick,
            _ => Self::WorkoutType(name.to_owned()),
        }
    }

    /// Whether a workout entry passes this filter
    #[must_use]
    pub fn matches(&self, entry: &WorkoutEntry) -> bool {
        match self {
            Self::All => true,
            Self::Level(level) => entry.level == *level,
            Self::Intensity(intensity) => entry.intensity == *intensity,
            Self::Quick => entry.duration_minutes <= QUICK_WORKOUT_MAX_MINUTES,
            Self::WorkoutType(name) => entry.workout_type.eq_ignore_ascii_case(name),
        }
    }
}

/// A selected daily plan with live-computed totals
///
/// Totals are always the sum over the four entries; they are never stored,
/// so they cannot drift from the plan contents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyPlan {
    /// Name of the template this plan came from
    pub name: &'static str,
    /// The four slots in canonical order
    pub entries: [PlanEntry; 4],
}

impl DailyPlan {
    fn from_template(template: &DailyPlanTemplate) -> Self {
        Self {
            name: template.name,
            entries: template.entries,
        }
    }

    /// Total calories across the four slots
    #[must_use]
    pub fn total_calories(&self) -> i32 {
        self.entries.iter().map(|e| e.calories).sum()
    }

    /// Total protein across the four slots (g)
    #[must_use]
    pub fn total_protein_g(&self) -> i32 {
        self.entries.iter().map(|e| e.protein_g).sum()
    }
}

/// Selector over the static catalogs, configured with calorie bands and the
/// display cap
#[derive(Debug, Clone)]
pub struct RecommendationSelector {
    config: EngineConfig,
}

impl Default for RecommendationSelector {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

impl RecommendationSelector {
    /// Create a selector with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` if the configuration fails validation.
    pub fn new(config: EngineConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assemble the augmented meal catalog for an optional estimate
    #[must_use]
    pub fn meal_catalog(&self, estimate: Option<&EnergyEstimate>) -> MealCatalog {
        MealCatalog::for_estimate(estimate, &self.config.calorie_bands)
    }

    /// Select the meal display list: filter, goal-rank, and truncate
    ///
    /// The returned list never exceeds the display cap. With no estimate the
    /// filtered entries keep catalog order; with an estimate, the goal
    /// reordering applies before truncation (stable, so ties keep catalog
    /// order).
    #[must_use]
    pub fn display_meals(
        &self,
        filter: MealFilter,
        estimate: Option<&EnergyEstimate>,
    ) -> Vec<&'static MealEntry> {
        let catalog = self.meal_catalog(estimate);

        let mut selected: Vec<&'static MealEntry> = match filter {
            // Category filters go through the meal-type index
            MealFilter::MealType(meal_type) => catalog.of_type(meal_type),
            _ => catalog
                .entries()
                .iter()
                .copied()
                .filter(|entry| filter.matches(entry))
                .collect(),
        };

        if let Some(estimate) = estimate {
            apply_goal_sort(&mut selected, estimate.goal);
        }

        selected.truncate(self.config.display.max_display_entries);
        tracing::debug!(
            ?filter,
            band = ?catalog.band(),
            returned = selected.len(),
            "selected meal display list"
        );
        selected
    }

    /// Select the workout display list: filter and truncate, catalog order
    #[must_use]
    pub fn display_workouts(&self, filter: &WorkoutFilter) -> Vec<&'static WorkoutEntry> {
        let mut selected: Vec<&'static WorkoutEntry> = WORKOUTS
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect();
        selected.truncate(self.config.display.max_display_entries);
        selected
    }

    /// Shuffle the full augmented meal catalog and take the display cap
    ///
    /// Uses a uniform Fisher-Yates shuffle over every entry of the catalog,
    /// so each entry is equally likely to appear in the result.
    #[must_use]
    pub fn shuffled_meals<R: Rng + ?Sized>(
        &self,
        estimate: Option<&EnergyEstimate>,
        rng: &mut R,
    ) -> Vec<&'static MealEntry> {
        let catalog = self.meal_catalog(estimate);
        let mut shuffled: Vec<&'static MealEntry> = catalog.entries().to_vec();
        shuffled.shuffle(rng);
        shuffled.truncate(self.config.display.max_display_entries);
        shuffled
    }

    /// Shuffle the workout catalog and take the display cap
    #[must_use]
    pub fn shuffled_workouts<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&'static WorkoutEntry> {
        let mut shuffled: Vec<&'static WorkoutEntry> = WORKOUTS.iter().collect();
        shuffled.shuffle(rng);
        shuffled.truncate(self.config.display.max_display_entries);
        shuffled
    }

    /// Pick a daily plan uniformly at random from the band's tier
    ///
    /// Re-selection is the caller's explicit action ("refresh" or an estimate
    /// change); the selector itself holds no plan state.
    #[must_use]
    pub fn select_daily_plan<R: Rng + ?Sized>(
        &self,
        estimate: Option<&EnergyEstimate>,
        rng: &mut R,
    ) -> DailyPlan {
        let band = CalorieBand::for_estimate(estimate, &self.config.calorie_bands);
        let tier = plans_for_band(band);
        // Shipped tiers are never empty; guarded for custom data.
        let template = tier.choose(rng).unwrap_or(&STANDARD_PLANS[0]);
        tracing::debug!(?band, plan = template.name, "selected daily plan");
        DailyPlan::from_template(template)
    }
}

/// Stable goal-based reordering of a meal list, applied before truncation
///
/// - Lose: descending protein density (protein per calorie)
/// - Gain: descending calories + protein
/// - Maintain: catalog order unchanged
fn apply_goal_sort(entries: &mut [&'static MealEntry], goal: Goal) {
    match goal {
        Goal::Lose => {
            entries.sort_by(|a, b| {
                protein_density(b)
                    .partial_cmp(&protein_density(a))
                    .unwrap_or(Ordering::Equal)
            });
        }
        Goal::Gain => {
            entries.sort_by_key(|entry| Reverse(entry.calories + entry.protein_g));
        }
        Goal::Maintain => {}
    }
}

/// Protein per calorie; catalog calories are always positive
fn protein_density(entry: &MealEntry) -> f64 {
    f64::from(entry.protein_g) / f64::from(entry.calories)
}
