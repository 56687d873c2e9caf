//! Pomodoro countdown.
//!
//! The timer does not own a clock. An external tick source calls [`FocusTimer::tick`]
//! once per elapsed second while the timer is running; ticks delivered while
//! stopped are ignored.
//!
//! ```text
//! Idle --start--> Running --pause--> Idle
//! Running --tick (t>1)--> Running
//! Running --tick (t=1)--> Idle (t rearmed to SESSION_SECONDS, reward)
//! any --reset--> Idle (t = SESSION_SECONDS)
//! ```

use serde::Serialize;

/// Length of one focus session in seconds (25 minutes)
pub const SESSION_SECONDS: u32 = 25 * 60;

/// Observable phase of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimerPhase {
    Idle,
    Running,
}

/// Result of delivering one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; nothing changed
    Ignored,
    /// One second elapsed, session still in progress
    Counted,
    /// The session reached zero and the timer rearmed itself
    Completed,
}

/// Countdown state for the focus session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusTimer {
    running: bool,
    remaining_seconds: u32,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            running: false,
            remaining_seconds: SESSION_SECONDS,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else {
            TimerPhase::Idle
        }
    }

    /// Stopped part-way through a session
    pub fn is_paused(&self) -> bool {
        !self.running && self.remaining_seconds < SESSION_SECONDS
    }

    /// Fraction of the current session already elapsed (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        let elapsed = SESSION_SECONDS.saturating_sub(self.remaining_seconds);
        f64::from(elapsed) / f64::from(SESSION_SECONDS)
    }

    /// Start counting down. Returns false when nothing changed.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining_seconds == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop counting down. Returns false when the timer was not running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Start when stopped, pause when running
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Back to a full, stopped session
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = SESSION_SECONDS;
    }

    /// Deliver one elapsed second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counted;
        }

        self.running = false;
        self.remaining_seconds = SESSION_SECONDS;
        TickOutcome::Completed
    }

    /// Remaining time as "MM:SS"
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Format seconds as zero-padded "MM:SS"
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
