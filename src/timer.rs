// ABOUTME: Countdown session timer with a pure state machine and a tokio tick task
// ABOUTME: One-second decrements, pause/resume, reset, and edge-triggered completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AptEats

//! Session timer.
//!
//! [`Countdown`] is the pure state machine: no clock, no task, every
//! transition is an explicit method call, so its behavior is fully testable
//! without time. [`SessionTimer`] wraps it in a background tokio task that
//! calls [`Countdown::tick`] once per second while the countdown is running
//! and fires the completion callback exactly once per run.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Tick period of the background task
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Phase of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerPhase {
    /// Not started, or reset; remaining equals total
    Idle,
    /// Counting down
    Running,
    /// Suspended mid-run; remaining is preserved
    Paused,
    /// Reached zero; stays here until reset
    Completed,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running; nothing changed
    Inactive,
    /// One second elapsed; seconds still remaining
    Decremented { remaining_seconds: u32 },
    /// This tick brought the countdown to zero
    ///
    /// Returned exactly once per run: the phase is now
    /// [`TimerPhase::Completed`] and further ticks are [`Self::Inactive`].
    Completed,
}

/// Pure countdown state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total_seconds: u32,
    remaining_seconds: u32,
    phase: TimerPhase,
}

impl Countdown {
    /// Create an idle countdown
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `total_seconds` is zero.
    pub fn new(total_seconds: u32) -> AppResult<Self> {
        if total_seconds == 0 {
            return Err(AppError::invalid_input(
                "countdown duration must be at least one second",
            ));
        }
        Ok(Self {
            total_seconds,
            remaining_seconds: total_seconds,
            phase: TimerPhase::Idle,
        })
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Configured duration (seconds)
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Seconds remaining in the current run
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Fraction of the run still remaining, in `[0.0, 1.0]`
    #[must_use]
    pub fn progress_remaining(&self) -> f64 {
        f64::from(self.remaining_seconds) / f64::from(self.total_seconds)
    }

    /// Begin counting down; only meaningful from [`TimerPhase::Idle`]
    pub fn start(&mut self) {
        if self.phase == TimerPhase::Idle {
            self.phase = TimerPhase::Running;
        }
    }

    /// Suspend a running countdown, preserving the remaining time
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
        }
    }

    /// Resume a paused countdown
    pub fn resume(&mut self) {
        if self.phase == TimerPhase::Paused {
            self.phase = TimerPhase::Running;
        }
    }

    /// Pause if running, resume if paused, start if idle
    pub fn toggle(&mut self) {
        match self.phase {
            TimerPhase::Idle => self.start(),
            TimerPhase::Running => self.pause(),
            TimerPhase::Paused => self.resume(),
            TimerPhase::Completed => {}
        }
    }

    /// Return to idle with the full duration restored; valid from any phase
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.phase = TimerPhase::Idle;
    }

    /// Advance one second
    ///
    /// Decrements only while running; the tick that reaches zero moves the
    /// countdown to [`TimerPhase::Completed`] and reports it once.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TimerPhase::Running {
            return TickOutcome::Inactive;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.phase = TimerPhase::Completed;
            TickOutcome::Completed
        } else {
            TickOutcome::Decremented {
                remaining_seconds: self.remaining_seconds,
            }
        }
    }
}

/// Point-in-time view of a session timer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimerSnapshot {
    /// Current phase
    pub phase: TimerPhase,
    /// Configured duration (seconds)
    pub total_seconds: u32,
    /// Seconds remaining in the current run
    pub remaining_seconds: u32,
    /// Fraction of the run still remaining
    pub progress_remaining: f64,
}

/// Callback fired when a run reaches zero
pub type CompletionCallback = Arc<dyn Fn() + Send + Sync>;

/// Countdown driven by a background one-second tick task
///
/// Uses `Arc<RwLock<Countdown>>` for shared state between caller operations
/// and the tick task. The task exits on the shutdown signal sent from
/// [`Drop`], or when all senders are gone.
pub struct SessionTimer {
    countdown: Arc<RwLock<Countdown>>,
    shutdown_tx: tokio::sync::mpsc::Sender<()>,
}

impl SessionTimer {
    /// Spawn a timer that starts counting down immediately
    ///
    /// `on_complete` fires exactly once each time a run reaches zero; after a
    /// [`Self::reset`] and restart it fires again for the new run.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `total_seconds` is zero.
    pub fn start(total_seconds: u32, on_complete: CompletionCallback) -> AppResult<Self> {
        let mut inner = Countdown::new(total_seconds)?;
        inner.start();
        let countdown = Arc::new(RwLock::new(inner));

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::mpsc::channel::<()>(1);
        let countdown_clone = countdown.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_PERIOD);
            // The first interval tick resolves immediately; consume it so the
            // first decrement lands one full second after start.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let outcome = countdown_clone.write().await.tick();
                        if outcome == TickOutcome::Completed {
                            tracing::debug!("session countdown completed");
                            on_complete();
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!("session timer tick task received shutdown signal");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            countdown,
            shutdown_tx,
        })
    }

    /// Spawn a timer for a workout session, given its length in minutes
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `duration_minutes` is zero.
    pub fn start_for_workout(
        duration_minutes: u32,
        on_complete: CompletionCallback,
    ) -> AppResult<Self> {
        Self::start(duration_minutes.saturating_mul(60), on_complete)
    }

    /// Suspend the countdown; the tick task keeps running but stops decrementing
    pub async fn pause(&self) {
        self.countdown.write().await.pause();
    }

    /// Resume a paused countdown
    pub async fn resume(&self) {
        self.countdown.write().await.resume();
    }

    /// Pause/resume toggle
    pub async fn toggle(&self) {
        self.countdown.write().await.toggle();
    }

    /// Reset to idle with the full duration; call [`Self::begin`] to run again
    pub async fn reset(&self) {
        self.countdown.write().await.reset();
    }

    /// Start an idle countdown (after a reset)
    pub async fn begin(&self) {
        self.countdown.write().await.start();
    }

    /// Current state of the countdown
    pub async fn snapshot(&self) -> TimerSnapshot {
        let countdown = self.countdown.read().await;
        TimerSnapshot {
            phase: countdown.phase(),
            total_seconds: countdown.total_seconds(),
            remaining_seconds: countdown.remaining_seconds(),
            progress_remaining: countdown.progress_remaining(),
        }
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        // Errors are expected if the channel is already closed
        if let Err(e) = self.shutdown_tx.try_send(()) {
            tracing::debug!(error = ?e, "session timer shutdown signal send failed");
        }
    }
}
