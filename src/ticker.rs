use std::time::{Duration, Instant};

/// Default input poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// One countdown step
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Get input poll duration, clamped to a sane range
pub fn poll_duration(poll_ms: u64) -> Duration {
    Duration::from_millis(poll_ms.clamp(10, 1000))
}

/// Periodic tick source for the focus timer.
///
/// Armed only while the timer runs. Each call to [`TickSource::due_ticks`]
/// reports the whole periods elapsed since arming or the last drain and
/// carries the remainder forward, so slow frames never lose a second.
#[derive(Debug, Clone)]
pub struct TickSource {
    period: Duration,
    armed_at: Option<Instant>,
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl TickSource {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed_at: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Start a fresh period at `now`. No-op when already armed.
    pub fn arm(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    /// Arm or disarm to match the timer state
    pub fn sync(&mut self, running: bool, now: Instant) {
        if running {
            self.arm(now);
        } else {
            self.disarm();
        }
    }

    /// Number of whole periods elapsed since the last call
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(since) = self.armed_at else {
            return 0;
        };
        if self.period.is_zero() {
            return 0;
        }

        let elapsed = now.saturating_duration_since(since);
        let due = (elapsed.as_nanos() / self.period.as_nanos()) as u32;
        if due > 0 {
            self.armed_at = Some(since + self.period * due);
        }
        due
    }

    /// Time left until the next tick, if armed
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        let since = self.armed_at?;
        let elapsed = now.saturating_duration_since(since);
        Some(self.period.saturating_sub(elapsed))
    }
}
