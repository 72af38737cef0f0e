// ABOUTME: Criterion benchmarks for estimation and recommendation selection
// ABOUTME: Measures estimate, display-list, shuffle, and daily-plan latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Criterion benchmarks for the engine hot paths.
//!
//! Measures the full estimation pipeline, filtered display selection with
//! goal ranking, the catalog shuffle, and daily plan selection.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use apteats_engine::config::EngineConfig;
use apteats_engine::estimator::{
    estimate_daily_target, ActivityLevel, BiometricInput, Goal, Sex,
};
use apteats_engine::selector::{MealFilter, RecommendationSelector, WorkoutFilter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_input(goal: Goal) -> BiometricInput {
    BiometricInput {
        age_years: 30,
        sex: Sex::Male,
        weight_kg: 80.0,
        height_cm: 180.0,
        activity_level: ActivityLevel::Moderate,
        goal,
    }
}

fn bench_estimation(c: &mut Criterion) {
    let config = EngineConfig::default();
    let input = bench_input(Goal::Maintain);

    c.bench_function("estimate_daily_target", |b| {
        b.iter(|| estimate_daily_target(black_box(&input), black_box(&config)).unwrap());
    });
}

fn bench_display_selection(c: &mut Criterion) {
    let config = EngineConfig::default();
    let selector = RecommendationSelector::new(config.clone()).unwrap();
    let gain = estimate_daily_target(&bench_input(Goal::Gain), &config).unwrap();

    let mut group = c.benchmark_group("display_meals");
    group.bench_function("all_no_estimate", |b| {
        b.iter(|| selector.display_meals(black_box(MealFilter::All), None));
    });
    group.bench_function("all_gain_ranked", |b| {
        b.iter(|| selector.display_meals(black_box(MealFilter::All), Some(&gain)));
    });
    group.bench_function("high_protein", |b| {
        b.iter(|| selector.display_meals(black_box(MealFilter::HighProtein), Some(&gain)));
    });
    group.finish();

    c.bench_function("display_workouts_all", |b| {
        b.iter(|| selector.display_workouts(black_box(&WorkoutFilter::All)));
    });
}

fn bench_shuffle_and_plan(c: &mut Criterion) {
    let config = EngineConfig::default();
    let selector = RecommendationSelector::new(config.clone()).unwrap();
    let gain = estimate_daily_target(&bench_input(Goal::Gain), &config).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("shuffled_meals", |b| {
        b.iter(|| selector.shuffled_meals(Some(&gain), &mut rng));
    });
    c.bench_function("select_daily_plan", |b| {
        b.iter(|| selector.select_daily_plan(Some(&gain), &mut rng));
    });
}

criterion_group!(
    benches,
    bench_estimation,
    bench_display_selection,
    bench_shuffle_and_plan
);
criterion_main!(benches);
