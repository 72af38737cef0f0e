// ABOUTME: Catalog assembly and indexed lookup over the static meal/workout data
// ABOUTME: Selects calorie-band tiers and provides O(1) category filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Catalog assembly.
//!
//! The static catalogs live in [`meals`], [`workouts`], and [`plans`]. This
//! module derives the calorie band from an energy estimate and assembles the
//! augmented meal catalog for that band: the standard tier always, plus the
//! high- or low-calorie tier when the target falls in that band. The
//! assembled catalog carries a meal-type index so category filters avoid a
//! linear scan.

pub mod meals;
pub mod plans;
pub mod workouts;

pub use meals::{MealEntry, MealType, Micronutrient};
pub use plans::{DailyPlanTemplate, MealSlot, PlanEntry};
pub use workouts::{Intensity, WorkoutEntry, WorkoutLevel};

use crate::config::CalorieBandsConfig;
use crate::estimator::EnergyEstimate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Calorie band a target falls in, selecting the catalog tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalorieBand {
    /// Target below the low threshold
    Low,
    /// Target between the thresholds, or no estimate yet
    Standard,
    /// Target above the high threshold
    High,
}

impl CalorieBand {
    /// Derive the band from an optional estimate
    ///
    /// An absent estimate (no calculation has run yet) is the standard band.
    #[must_use]
    pub fn for_estimate(estimate: Option<&EnergyEstimate>, config: &CalorieBandsConfig) -> Self {
        match estimate {
            Some(e) if e.target_calories > config.high_calorie_threshold => Self::High,
            Some(e) if e.target_calories < config.low_calorie_threshold => Self::Low,
            _ => Self::Standard,
        }
    }
}

/// Augmented meal catalog for one calorie band, with a meal-type index
///
/// Every selector operation (filter, shuffle, plan selection) works from this
/// assembled view until the estimate changes and the caller rebuilds it.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    band: CalorieBand,
    entries: Vec<&'static MealEntry>,
    by_type: HashMap<MealType, Vec<usize>>,
}

impl MealCatalog {
    /// Assemble the catalog for a calorie band
    ///
    /// Standard tier first, then the band tier appended, preserving catalog
    /// order within each tier.
    #[must_use]
    pub fn for_band(band: CalorieBand) -> Self {
        let mut entries: Vec<&'static MealEntry> = meals::STANDARD_MEALS.iter().collect();
        match band {
            CalorieBand::High => entries.extend(meals::HIGH_CALORIE_MEALS.iter()),
            CalorieBand::Low => entries.extend(meals::LOW_CALORIE_MEALS.iter()),
            CalorieBand::Standard => {}
        }

        let mut by_type: HashMap<MealType, Vec<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_type.entry(entry.meal_type).or_default().push(index);
        }

        tracing::debug!(?band, entries = entries.len(), "assembled meal catalog");
        Self {
            band,
            entries,
            by_type,
        }
    }

    /// Assemble the catalog for an optional estimate
    #[must_use]
    pub fn for_estimate(
        estimate: Option<&EnergyEstimate>,
        config: &CalorieBandsConfig,
    ) -> Self {
        Self::for_band(CalorieBand::for_estimate(estimate, config))
    }

    /// The band this catalog was assembled for
    #[must_use]
    pub const fn band(&self) -> CalorieBand {
        self.band
    }

    /// All entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[&'static MealEntry] {
        &self.entries
    }

    /// Entries of one meal type, in catalog order, via the index
    #[must_use]
    pub fn of_type(&self, meal_type: MealType) -> Vec<&'static MealEntry> {
        self.by_type
            .get(&meal_type)
            .map(|indices| indices.iter().map(|&i| self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Number of entries in the assembled catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the assembled catalog is empty (never true for shipped data)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Daily plan templates for one calorie band
#[must_use]
pub fn plans_for_band(band: CalorieBand) -> &'static [DailyPlanTemplate] {
    match band {
        CalorieBand::High => plans::HIGH_CALORIE_PLANS,
        CalorieBand::Low => plans::LOW_CALORIE_PLANS,
        CalorieBand::Standard => plans::STANDARD_PLANS,
    }
}
