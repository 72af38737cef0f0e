// ABOUTME: Energy estimation configuration for BMR, TDEE, and goal adjustment
// ABOUTME: Carries Mifflin-St Jeor coefficients, activity multipliers, and goal offsets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Energy Estimation Configuration
//!
//! Formula coefficients and multipliers for the energy estimator. Defaults
//! carry the canonical published constants; every value is configurable so the
//! formulas stay free of magic numbers.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: McArdle et al. (2010) - Exercise Physiology

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition, 51(2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl BmrConfig {
    /// Validate coefficient signs and finiteness
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` if any coefficient is non-finite or if
    /// the weight/height coefficients are not positive.
    pub fn validate(&self) -> AppResult<()> {
        let coefficients = [
            ("msj_weight_coef", self.msj_weight_coef),
            ("msj_height_coef", self.msj_height_coef),
            ("msj_age_coef", self.msj_age_coef),
            ("msj_male_constant", self.msj_male_constant),
            ("msj_female_constant", self.msj_female_constant),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(AppError::config(format!("{name} must be finite, got {value}")));
            }
        }
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(AppError::config(
                "weight and height coefficients must be positive",
            ));
        }
        Ok(())
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: McArdle, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little to no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (athletic / physical job): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate that multipliers are at least 1.0 and monotonically ordered
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` if any multiplier is below 1.0 or the
    /// factors do not increase with activity level.
    pub fn validate(&self) -> AppResult<()> {
        let factors = [
            ("sedentary", self.sedentary),
            ("light", self.light),
            ("moderate", self.moderate),
            ("active", self.active),
            ("very_active", self.very_active),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 1.0 {
                return Err(AppError::config(format!(
                    "activity factor '{name}' must be at least 1.0, got {value}"
                )));
            }
        }
        let ordered = self.sedentary <= self.light
            && self.light <= self.moderate
            && self.moderate <= self.active
            && self.active <= self.very_active;
        if !ordered {
            return Err(AppError::config(
                "activity factors must not decrease with activity level",
            ));
        }
        Ok(())
    }
}

/// Goal adjustment offsets applied to TDEE
///
/// A fixed daily deficit/surplus is the standard guidance for roughly
/// 0.5 kg/week of weight change (7700 kcal per kg of body fat).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Daily deficit for weight loss (kcal): 500
    pub lose_deficit_kcal: f64,
    /// Daily surplus for muscle gain (kcal): 500
    pub gain_surplus_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_deficit_kcal: 500.0,
            gain_surplus_kcal: 500.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Validate that offsets are non-negative and finite
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigError` if either offset is negative or non-finite.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("lose_deficit_kcal", self.lose_deficit_kcal),
            ("gain_surplus_kcal", self.gain_surplus_kcal),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::config(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
