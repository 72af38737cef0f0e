// ABOUTME: Engine configuration aggregate with defaults and validation
// ABOUTME: Groups energy-formula and selection settings into a single struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Engine Configuration
//!
//! All tunable constants live here rather than inline in the algorithms.
//! `EngineConfig::default()` carries the canonical values; callers that load
//! a config from elsewhere should run [`EngineConfig::validate`] before use.

pub mod energy;
pub mod selection;

pub use energy::{ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig};
pub use selection::{CalorieBandsConfig, DisplayConfig};

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal adjustment offsets
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Calorie band thresholds for catalog tiers
    pub calorie_bands: CalorieBandsConfig,
    /// Display list settings
    pub display: DisplayConfig,
}

impl EngineConfig {
    /// Validate every section of the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ErrorCode::ConfigError` produced by a section.
    pub fn validate(&self) -> AppResult<()> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.goal_adjustment.validate()?;
        self.calorie_bands.validate()?;
        self.display.validate()?;
        Ok(())
    }
}
