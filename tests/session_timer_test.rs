// ABOUTME: Tests for the async session timer built on the countdown state machine
// ABOUTME: Uses paused tokio time so one-second ticks run deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats
//! Session timer tests
//!
//! These run with `start_paused = true`: tokio's clock only advances when the
//! test sleeps, so tick timing is exact and the tests finish instantly.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use apteats_engine::timer::{SessionTimer, TimerPhase};

fn counting_callback() -> (Arc<AtomicUsize>, Arc<dyn Fn() + Send + Sync>) {
    let completions = Arc::new(AtomicUsize::new(0));
    let counter = completions.clone();
    let callback: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (completions, callback)
}

#[tokio::test(start_paused = true)]
async fn test_timer_counts_down_one_second_per_tick() {
    let (_, callback) = counting_callback();
    let timer = SessionTimer::start(10, callback).unwrap();

    let snapshot = timer.snapshot().await;
    assert_eq!(snapshot.phase, TimerPhase::Running);
    assert_eq!(snapshot.remaining_seconds, 10);

    tokio::time::sleep(Duration::from_millis(3100)).await;
    let snapshot = timer.snapshot().await;
    assert_eq!(snapshot.remaining_seconds, 7);
    assert!((snapshot.progress_remaining - 0.7).abs() < f64::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_remaining_time() {
    let (_, callback) = counting_callback();
    let timer = SessionTimer::start(10, callback).unwrap();

    tokio::time::sleep(Duration::from_millis(2100)).await;
    timer.pause().await;
    assert_eq!(timer.snapshot().await.phase, TimerPhase::Paused);

    // Time passes; nothing decrements while paused
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(timer.snapshot().await.remaining_seconds, 8);

    timer.resume().await;
    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(timer.snapshot().await.remaining_seconds, 6);
}

#[tokio::test(start_paused = true)]
async fn test_completion_fires_exactly_once() {
    let (completions, callback) = counting_callback();
    let timer = SessionTimer::start(3, callback).unwrap();

    tokio::time::sleep(Duration::from_millis(3100)).await;
    let snapshot = timer.snapshot().await;
    assert_eq!(snapshot.phase, TimerPhase::Completed);
    assert_eq!(snapshot.remaining_seconds, 0);
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    // The tick task keeps running; completion must not fire again
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_allows_a_second_completed_run() {
    let (completions, callback) = counting_callback();
    let timer = SessionTimer::start(2, callback).unwrap();

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    timer.reset().await;
    let snapshot = timer.snapshot().await;
    assert_eq!(snapshot.phase, TimerPhase::Idle);
    assert_eq!(snapshot.remaining_seconds, 2);

    // Idle after reset: nothing ticks until begin
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(timer.snapshot().await.remaining_seconds, 2);

    timer.begin().await;
    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(completions.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_one_minute_workout_runs_to_completion() {
    let (completions, callback) = counting_callback();
    let timer = SessionTimer::start_for_workout(1, callback).unwrap();

    assert_eq!(timer.snapshot().await.total_seconds, 60);

    tokio::time::sleep(Duration::from_millis(60_100)).await;
    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert_eq!(timer.snapshot().await.remaining_seconds, 0);

    // Reset restores the full minute regardless of prior state
    timer.reset().await;
    assert_eq!(timer.snapshot().await.remaining_seconds, 60);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_alternates_pause_and_resume() {
    let (_, callback) = counting_callback();
    let timer = SessionTimer::start(10, callback).unwrap();

    timer.toggle().await;
    assert_eq!(timer.snapshot().await.phase, TimerPhase::Paused);
    timer.toggle().await;
    assert_eq!(timer.snapshot().await.phase, TimerPhase::Running);
}

#[tokio::test(start_paused = true)]
async fn test_zero_duration_is_rejected() {
    let (_, callback) = counting_callback();
    assert!(SessionTimer::start(0, callback).is_err());
}

#[tokio::test(start_paused = true)]
async fn test_drop_stops_the_tick_task() {
    let (completions, callback) = counting_callback();
    let timer = SessionTimer::start(5, callback).unwrap();

    tokio::time::sleep(Duration::from_millis(1100)).await;
    drop(timer);

    // If the task were still alive it would complete the run and fire the
    // callback during this window.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(completions.load(Ordering::SeqCst), 0);
}
