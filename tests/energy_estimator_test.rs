// ABOUTME: Algorithm tests for BMR, TDEE, and daily calorie target estimation
// ABOUTME: Covers formula vectors, goal adjustments, rounding, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats
//! Energy estimation tests
//!
//! Covers the full estimation pipeline:
//! - Mifflin-St Jeor BMR for male and female inputs
//! - TDEE across all 5 activity levels
//! - Goal adjustments (deficit, surplus, maintain)
//! - Target rounding and determinism
//! - Form resolution and range validation errors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use apteats_engine::config::EngineConfig;
use apteats_engine::errors::ErrorCode;
use apteats_engine::estimator::{
    apply_goal_adjustment, calculate_mifflin_st_jeor, calculate_tdee, estimate_daily_target,
    ActivityLevel, BiometricForm, BiometricInput, Goal, Sex,
};

fn male_moderate_maintain() -> BiometricInput {
    BiometricInput {
        age_years: 30,
        sex: Sex::Male,
        weight_kg: 80.0,
        height_cm: 180.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
    }
}

// ============================================================================
// BMR CALCULATION - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_mifflin_st_jeor_male_typical() {
    let config = EngineConfig::default();

    // 30-year-old male, 80kg, 180cm
    let bmr = calculate_mifflin_st_jeor(80.0, 180.0, 30, Sex::Male, &config.bmr).unwrap();

    // Expected: 10 * 80 + 6.25 * 180 - 5 * 30 + 5 = 800 + 1125 - 150 + 5 = 1780
    assert!((bmr - 1780.0).abs() < 1e-9, "BMR should be 1780, got {bmr}");
}

#[test]
fn test_mifflin_st_jeor_female_typical() {
    let config = EngineConfig::default();

    // 25-year-old female, 60kg, 165cm
    let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 25, Sex::Female, &config.bmr).unwrap();

    // Expected: 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 600 + 1031.25 - 125 - 161 = 1345.25
    assert!(
        (bmr - 1345.25).abs() < 1e-9,
        "BMR should be 1345.25, got {bmr}"
    );
}

#[test]
fn test_mifflin_st_jeor_sex_constant_difference() {
    let config = EngineConfig::default();

    // Same biometrics, different sex: constants differ by 166 kcal
    let male = calculate_mifflin_st_jeor(70.0, 170.0, 40, Sex::Male, &config.bmr).unwrap();
    let female = calculate_mifflin_st_jeor(70.0, 170.0, 40, Sex::Female, &config.bmr).unwrap();
    assert!((male - female - 166.0).abs() < 1e-9);
}

#[test]
fn test_mifflin_st_jeor_rejects_invalid_inputs() {
    let config = EngineConfig::default();

    assert!(calculate_mifflin_st_jeor(0.0, 180.0, 30, Sex::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(-70.0, 180.0, 30, Sex::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(f64::NAN, 180.0, 30, Sex::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(80.0, 0.0, 30, Sex::Male, &config.bmr).is_err());
    assert!(calculate_mifflin_st_jeor(80.0, 180.0, 0, Sex::Male, &config.bmr).is_err());
}

// ============================================================================
// TDEE - Activity Multipliers
// ============================================================================

#[test]
fn test_tdee_all_activity_levels() {
    let config = EngineConfig::default();
    let bmr = 1780.0;

    let cases = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Light, 1.375),
        (ActivityLevel::Moderate, 1.55),
        (ActivityLevel::Active, 1.725),
        (ActivityLevel::VeryActive, 1.9),
    ];
    for (level, factor) in cases {
        let tdee = calculate_tdee(bmr, level, &config.activity_factors).unwrap();
        assert!(
            (tdee - bmr * factor).abs() < 1e-9,
            "TDEE mismatch for {level:?}"
        );
    }
}

#[test]
fn test_tdee_rejects_non_positive_bmr() {
    let config = EngineConfig::default();
    assert!(calculate_tdee(0.0, ActivityLevel::Moderate, &config.activity_factors).is_err());
    assert!(calculate_tdee(-100.0, ActivityLevel::Moderate, &config.activity_factors).is_err());
    assert!(calculate_tdee(f64::NAN, ActivityLevel::Moderate, &config.activity_factors).is_err());
}

// ============================================================================
// GOAL ADJUSTMENT
// ============================================================================

#[test]
fn test_goal_adjustment_offsets() {
    let config = EngineConfig::default();
    let tdee = 2759.0;

    assert!((apply_goal_adjustment(tdee, Goal::Lose, &config.goal_adjustment) - 2259.0).abs() < 1e-9);
    assert!(
        (apply_goal_adjustment(tdee, Goal::Maintain, &config.goal_adjustment) - 2759.0).abs()
            < 1e-9
    );
    assert!((apply_goal_adjustment(tdee, Goal::Gain, &config.goal_adjustment) - 3259.0).abs() < 1e-9);
}

// ============================================================================
// FULL ESTIMATION PIPELINE
// ============================================================================

#[test]
fn test_estimate_male_moderate_maintain() {
    let config = EngineConfig::default();
    let estimate = estimate_daily_target(&male_moderate_maintain(), &config).unwrap();

    // BMR 1780, TDEE 1780 * 1.55 = 2759, no goal offset
    assert!((estimate.bmr - 1780.0).abs() < 1e-9);
    assert!((estimate.tdee - 2759.0).abs() < 1e-6);
    assert_eq!(estimate.target_calories, 2759);
    assert_eq!(estimate.goal, Goal::Maintain);
    assert_eq!(estimate.activity_level, ActivityLevel::Moderate);
}

#[test]
fn test_estimate_male_moderate_lose() {
    let config = EngineConfig::default();
    let input = BiometricInput {
        goal: Goal::Lose,
        ..male_moderate_maintain()
    };
    let estimate = estimate_daily_target(&input, &config).unwrap();

    // 2759 - 500 = 2259
    assert_eq!(estimate.target_calories, 2259);
}

#[test]
fn test_estimate_female_sedentary_gain() {
    let config = EngineConfig::default();
    let input = BiometricInput {
        age_years: 25,
        sex: Sex::Female,
        weight_kg: 60.0,
        height_cm: 165.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Gain,
    };
    let estimate = estimate_daily_target(&input, &config).unwrap();

    // BMR 1345.25, TDEE 1345.25 * 1.2 = 1614.3, round(1614.3 + 500) = 2114
    assert!((estimate.bmr - 1345.25).abs() < 1e-9);
    assert!((estimate.tdee - 1614.3).abs() < 1e-6);
    assert_eq!(estimate.target_calories, 2114);
}

#[test]
fn test_estimate_is_deterministic() {
    let config = EngineConfig::default();
    let input = male_moderate_maintain();

    let first = estimate_daily_target(&input, &config).unwrap();
    let second = estimate_daily_target(&input, &config).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// INPUT VALIDATION
// ============================================================================

#[test]
fn test_validation_rejects_rather_than_clamps() {
    let config = EngineConfig::default();

    let zero_age = BiometricInput {
        age_years: 0,
        ..male_moderate_maintain()
    };
    assert_eq!(
        estimate_daily_target(&zero_age, &config).unwrap_err().code,
        ErrorCode::InvalidInput
    );

    let ancient = BiometricInput {
        age_years: 130,
        ..male_moderate_maintain()
    };
    assert_eq!(
        estimate_daily_target(&ancient, &config).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let negative_weight = BiometricInput {
        weight_kg: -80.0,
        ..male_moderate_maintain()
    };
    assert_eq!(
        estimate_daily_target(&negative_weight, &config)
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );

    let nan_height = BiometricInput {
        height_cm: f64::NAN,
        ..male_moderate_maintain()
    };
    assert_eq!(
        estimate_daily_target(&nan_height, &config).unwrap_err().code,
        ErrorCode::InvalidInput
    );

    let giant = BiometricInput {
        height_cm: 400.0,
        ..male_moderate_maintain()
    };
    assert_eq!(
        estimate_daily_target(&giant, &config).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_form_with_missing_weight_is_an_error_not_a_number() {
    let form = BiometricForm {
        age_years: Some(30),
        sex: Some(Sex::Male),
        weight_kg: None,
        height_cm: Some(180.0),
        activity_level: Some(ActivityLevel::Moderate),
        goal: Some(Goal::Maintain),
    };

    let err = form.resolve().unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("weight_kg"));
}

#[test]
fn test_complete_form_resolves_and_estimates() {
    let config = EngineConfig::default();
    let form = BiometricForm {
        age_years: Some(30),
        sex: Some(Sex::Male),
        weight_kg: Some(80.0),
        height_cm: Some(180.0),
        activity_level: Some(ActivityLevel::Moderate),
        goal: Some(Goal::Maintain),
    };

    let input = form.resolve().unwrap();
    let estimate = estimate_daily_target(&input, &config).unwrap();
    assert_eq!(estimate.target_calories, 2759);
}

#[test]
fn test_empty_form_reports_first_missing_field() {
    let err = BiometricForm::default().resolve().unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("age_years"));
}
