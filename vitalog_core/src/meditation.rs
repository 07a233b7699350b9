//! The meditation engine: a single active-session timer state machine.
//!
//! The engine owns exactly one timer. An external one-second clock drives
//! [`MeditationEngine::tick`], but only through an epoch-stamped
//! [`TickHandle`]: every transition away from `Running` bumps the epoch,
//! so a stale clock that keeps firing after pause, stop or completion can
//! never decrement state it no longer owns. At most one live handle exists
//! per engine at any time.

use crate::{SessionDef, TimerStatus};

/// Capability to drive the engine's clock.
///
/// Issued by [`MeditationEngine::start`] and [`MeditationEngine::resume`];
/// invalidated by any transition away from `Running`. Deliberately not
/// `Clone`: one schedule, one holder.
#[derive(Debug)]
pub struct TickHandle {
    epoch: u64,
}

/// Outcome of a clock tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Timer decremented and still running
    Running { remaining_seconds: u32 },
    /// Timer reached zero; session complete, schedule cancelled
    Completed,
    /// Stale handle or engine not running; nothing changed
    Ignored,
}

#[derive(Clone, Debug)]
struct ActiveSession {
    def_id: String,
    duration_seconds: u32,
}

/// Timer state machine for guided meditation sessions.
///
/// Holds the invariant `0 <= remaining_seconds <= duration` of the active
/// session at all times. Operations invoked from an invalid state are
/// no-ops, matching the reference behavior.
#[derive(Debug, Default)]
pub struct MeditationEngine {
    active: Option<ActiveSession>,
    remaining_seconds: u32,
    status: TimerStatus,
    volume: u8,
    clock_epoch: u64,
    minutes_logged: u32,
}

impl MeditationEngine {
    pub fn new() -> Self {
        Self {
            volume: 80,
            ..Self::default()
        }
    }

    /// Engine seeded with minutes already credited today
    pub fn with_logged_minutes(minutes: u32) -> Self {
        Self {
            minutes_logged: minutes,
            ..Self::new()
        }
    }

    /// Start a session from any state.
    ///
    /// Cancels any previous schedule before establishing the new one, so
    /// starting while another session runs can never leave two live
    /// clocks.
    pub fn start(&mut self, session: &SessionDef) -> TickHandle {
        self.clock_epoch += 1;
        self.active = Some(ActiveSession {
            def_id: session.id.clone(),
            duration_seconds: session.duration_seconds,
        });
        self.remaining_seconds = session.duration_seconds;
        self.status = TimerStatus::Running;

        tracing::debug!(
            "Started session '{}' ({} s)",
            session.id,
            session.duration_seconds
        );
        TickHandle {
            epoch: self.clock_epoch,
        }
    }

    /// Pause a running timer; no-op from any other state.
    pub fn pause(&mut self) {
        if self.status != TimerStatus::Running {
            return;
        }
        self.status = TimerStatus::Paused;
        self.clock_epoch += 1;
        tracing::debug!("Paused at {} s remaining", self.remaining_seconds);
    }

    /// Resume a paused timer, issuing a fresh schedule; `None` from any
    /// other state. Progress is preserved.
    pub fn resume(&mut self) -> Option<TickHandle> {
        if self.status != TimerStatus::Paused {
            return None;
        }
        self.status = TimerStatus::Running;
        self.clock_epoch += 1;
        tracing::debug!("Resumed at {} s remaining", self.remaining_seconds);
        Some(TickHandle {
            epoch: self.clock_epoch,
        })
    }

    /// Reset progress to the full session duration and hold, paused.
    ///
    /// Reachable from `Running` or `Paused`. Distinct from idle: the
    /// session stays selected, only progress resets.
    pub fn stop(&mut self) {
        let Some(active) = &self.active else { return };
        if !matches!(self.status, TimerStatus::Running | TimerStatus::Paused) {
            return;
        }
        if self.status == TimerStatus::Running {
            self.clock_epoch += 1;
        }
        self.remaining_seconds = active.duration_seconds;
        self.status = TimerStatus::Paused;
        tracing::debug!("Stopped; progress reset to {} s", self.remaining_seconds);
    }

    /// Advance the timer by one second.
    ///
    /// Accepted only while running and only from the current handle;
    /// anything else returns [`Tick::Ignored`] and mutates nothing. On
    /// reaching zero the session completes, the schedule is cancelled and
    /// the session's whole minutes are credited.
    pub fn tick(&mut self, handle: &TickHandle) -> Tick {
        if self.status != TimerStatus::Running || handle.epoch != self.clock_epoch {
            return Tick::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.status = TimerStatus::Completed;
            self.clock_epoch += 1;
            if let Some(active) = &self.active {
                self.minutes_logged += active.duration_seconds / 60;
                tracing::info!("Session '{}' completed", active.def_id);
            }
            return Tick::Completed;
        }

        Tick::Running {
            remaining_seconds: self.remaining_seconds,
        }
    }

    /// Set playback volume, clamped to [0, 100]. Orthogonal to the timer.
    pub fn set_volume(&mut self, volume: i64) {
        self.volume = volume.clamp(0, 100) as u8;
    }

    /// Credit meditation minutes directly (quick-add path)
    pub fn log_minutes(&mut self, minutes: u32) {
        self.minutes_logged += minutes;
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Id of the selected session, if any
    pub fn active_session_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.def_id.as_str())
    }

    /// Total minutes credited today (completions plus quick-adds)
    pub fn minutes_logged(&self) -> u32 {
        self.minutes_logged
    }
}

/// Format a second count as `m:ss` for display
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
