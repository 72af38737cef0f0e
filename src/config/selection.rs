// ABOUTME: Recommendation selection configuration for calorie bands and display limits
// ABOUTME: Configures catalog tier thresholds and the display-list cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Recommendation Selection Configuration
//!
//! Thresholds that drive catalog tier augmentation and the hard cap on how
//! many entries the display list may contain.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Calorie band thresholds for catalog tier selection
///
/// Targets above the high threshold pull in the high-calorie tier, targets
/// below the low threshold pull in the low-calorie tier; everything between
/// uses the standard catalog alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieBandsConfig {
    /// Targets strictly above this use the high-calorie tier (kcal/day): 2500
    pub high_calorie_threshold: i32,
    /// Targets strictly below this use the low-calorie tier (kcal/day): 1800
    pub low_calorie_threshold: i32,
}

impl Default for CalorieBandsConfig {
    fn default() -> Self {
        Self {
            high_calorie_threshold: 2500,
            low_calorie_threshold: 1800,
        }
    }
}

impl CalorieBandsConfig {
    /// Validate that the thresholds are positive and do not overlap
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` if a threshold is non-positive or the
    /// low threshold is not below the high threshold.
    pub fn validate(&self) -> AppResult<()> {
        if self.low_calorie_threshold <= 0 || self.high_calorie_threshold <= 0 {
            return Err(AppError::config("calorie band thresholds must be positive"));
        }
        if self.low_calorie_threshold >= self.high_calorie_threshold {
            return Err(AppError::config(format!(
                "low threshold {} must be below high threshold {}",
                self.low_calorie_threshold, self.high_calorie_threshold
            )));
        }
        Ok(())
    }
}

/// Display list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Hard cap on entries in a display list (not a pagination mechanism): 8
    pub max_display_entries: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_display_entries: 8,
        }
    }
}

impl DisplayConfig {
    /// Validate that the display cap is non-zero
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` if the cap is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_display_entries == 0 {
            return Err(AppError::config("max_display_entries must be non-zero"));
        }
        Ok(())
    }
}
