// ABOUTME: Energy estimation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, and goal-adjusted daily calorie target calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Energy Estimator
//!
//! Pure, deterministic mapping from validated biometric input to an energy
//! estimate: Basal Metabolic Rate (BMR), Total Daily Energy Expenditure
//! (TDEE), and a goal-adjusted daily calorie target.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2).
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - McArdle, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use crate::config::{ActivityFactorsConfig, BmrConfig, EngineConfig, GoalAdjustmentConfig};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for age (years); the Mifflin-St Jeor formula is not
/// validated beyond this.
const MAX_AGE_YEARS: u32 = 120;

/// Upper bound accepted for body weight (kg).
const MAX_WEIGHT_KG: f64 = 500.0;

/// Upper bound accepted for height (cm).
const MAX_HEIGHT_CM: f64 = 300.0;

/// Biological sex for BMR calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    /// Male (+5 constant)
    Male,
    /// Female (-161 constant)
    Female,
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little to no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Active,
    /// Athletic / physical job
    VeryActive,
}

impl ActivityLevel {
    /// Short display label, matching the calculator UI
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Active => "Active",
            Self::VeryActive => "Very Active",
        }
    }

    /// One-line description shown next to the label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sedentary => "Little to no exercise",
            Self::Light => "1-3 days/week",
            Self::Moderate => "3-5 days/week",
            Self::Active => "6-7 days/week",
            Self::VeryActive => "Athletic / Physical job",
        }
    }

    /// Look up the TDEE multiplier for this level
    #[must_use]
    pub const fn factor(self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::Light => config.light,
            Self::Moderate => config.moderate,
            Self::Active => config.active,
            Self::VeryActive => config.very_active,
        }
    }
}

/// Weight goal driving the calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Stay at current weight
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Short display label, matching the calculator UI
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lose => "Lose Weight",
            Self::Maintain => "Maintain",
            Self::Gain => "Gain Muscle",
        }
    }

    /// One-line description shown next to the label
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Lose => "Caloric deficit",
            Self::Maintain => "Stay at current weight",
            Self::Gain => "Caloric surplus",
        }
    }
}

/// Raw calculator form state, where numeric fields may still be empty
///
/// Mirrors the calculator panel: sex, activity level, and goal always have a
/// selection, while age, weight, and height start blank. [`Self::resolve`]
/// turns a completed form into a validated [`BiometricInput`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiometricForm {
    /// Age in years, if entered
    pub age_years: Option<u32>,
    /// Biological sex selection
    pub sex: Option<Sex>,
    /// Body weight in kilograms, if entered
    pub weight_kg: Option<f64>,
    /// Height in centimeters, if entered
    pub height_cm: Option<f64>,
    /// Activity level selection
    pub activity_level: Option<ActivityLevel>,
    /// Goal selection
    pub goal: Option<Goal>,
}

impl BiometricForm {
    /// Resolve the form into validated biometric input
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::MissingRequiredField` naming the first empty field.
    /// The caller should surface this as "fill in required fields" rather than
    /// an error state; no estimate can be produced yet.
    pub fn resolve(&self) -> AppResult<BiometricInput> {
        let input = BiometricInput {
            age_years: self.age_years.ok_or_else(|| AppError::missing_field("age_years"))?,
            sex: self.sex.ok_or_else(|| AppError::missing_field("sex"))?,
            weight_kg: self.weight_kg.ok_or_else(|| AppError::missing_field("weight_kg"))?,
            height_cm: self.height_cm.ok_or_else(|| AppError::missing_field("height_cm"))?,
            activity_level: self
                .activity_level
                .ok_or_else(|| AppError::missing_field("activity_level"))?,
            goal: self.goal.ok_or_else(|| AppError::missing_field("goal"))?,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Validated biometric input for a single estimation request
///
/// Transient; constructed fresh per calculation and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    /// Age in years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
}

impl BiometricInput {
    /// Validate ranges: non-positive or non-finite values are rejected rather
    /// than clamped, so the engine never produces a misleading number.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for non-positive or non-finite
    /// values, `ErrorCode::ValueOutOfRange` for values beyond the ranges the
    /// formula is validated for.
    pub fn validate(&self) -> AppResult<()> {
        if self.age_years == 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }
        if self.age_years > MAX_AGE_YEARS {
            return Err(AppError::value_out_of_range(format!(
                "Age must be at most {MAX_AGE_YEARS} years"
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be a positive number"));
        }
        if self.weight_kg > MAX_WEIGHT_KG {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be at most {MAX_WEIGHT_KG} kg"
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be a positive number"));
        }
        if self.height_cm > MAX_HEIGHT_CM {
            return Err(AppError::value_out_of_range(format!(
                "Height must be at most {MAX_HEIGHT_CM} cm"
            )));
        }
        Ok(())
    }
}

/// Energy estimate derived from one biometric input
///
/// Immutable once computed; a recalculation produces a new value rather than
/// mutating an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target, rounded half-up (kcal/day)
    pub target_calories: i32,
    /// Goal the target was adjusted for
    pub goal: Goal,
    /// Activity level used for the TDEE multiplier
    pub activity_level: ActivityLevel,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges.
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::invalid_input(format!(
            "Weight must be between 0 and {MAX_WEIGHT_KG} kg"
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > MAX_HEIGHT_CM {
        return Err(AppError::invalid_input(format!(
            "Height must be between 0 and {MAX_HEIGHT_CM} cm"
        )));
    }
    if age_years == 0 || age_years > MAX_AGE_YEARS {
        return Err(AppError::invalid_input(format!(
            "Age must be between 1 and {MAX_AGE_YEARS} years"
        )));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor.
///
/// # Errors
///
/// Returns an error if BMR is not positive.
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }
    Ok(bmr * activity_level.factor(config))
}

/// Apply the goal offset to a TDEE value
///
/// Lose subtracts the configured deficit, gain adds the configured surplus,
/// maintain leaves TDEE unchanged.
#[must_use]
pub fn apply_goal_adjustment(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        Goal::Lose => tdee - config.lose_deficit_kcal,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + config.gain_surplus_kcal,
    }
}

/// Calculate the complete energy estimate for one biometric input
///
/// This is the main entry point combining BMR, TDEE, and goal adjustment.
/// Fully deterministic: the same input always produces the same estimate.
///
/// # Errors
///
/// Returns an error if input validation fails; the caller must treat this as
/// "not yet computable" and display no estimate.
pub fn estimate_daily_target(
    input: &BiometricInput,
    config: &EngineConfig,
) -> AppResult<EnergyEstimate> {
    input.validate()?;

    let bmr = calculate_mifflin_st_jeor(
        input.weight_kg,
        input.height_cm,
        input.age_years,
        input.sex,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, input.activity_level, &config.activity_factors)?;
    let adjusted = apply_goal_adjustment(tdee, input.goal, &config.goal_adjustment);

    // f64::round is round-half-away-from-zero; adjusted targets are positive
    // for any accepted input, so this is round-half-up.
    #[allow(clippy::cast_possible_truncation)]
    let target_calories = adjusted.round() as i32;

    tracing::debug!(
        bmr,
        tdee,
        target_calories,
        goal = ?input.goal,
        activity_level = ?input.activity_level,
        "computed energy estimate"
    );

    Ok(EnergyEstimate {
        bmr,
        tdee,
        target_calories,
        goal: input.goal,
        activity_level: input.activity_level,
    })
}
