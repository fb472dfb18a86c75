use std::time::{Duration, Instant};

/// Monotonic stopwatch with pause/resume and an optional deadline.
///
/// Paused time does not accrue toward `elapsed`, so an interactive pause in
/// the outer search loop does not eat into the wall-clock budget. Deadlines
/// are polled: the search checks `has_timeout` at loop boundaries and exits
/// cleanly, nothing is interrupted mid-operation.
#[derive(Debug, Clone)]
pub struct DeadlineTimer {
    started_at: Option<Instant>,
    accumulated: Duration,
    timeout: Option<Duration>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self {
            started_at: None,
            accumulated: Duration::ZERO,
            timeout: None,
        }
    }

    /// Starts measuring from zero, discarding any previously accumulated
    /// time. The configured deadline is kept.
    pub fn start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = Some(Instant::now());
    }

    /// Stops the clock, banking the running segment. No-op when paused.
    pub fn pause(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    /// Continues measuring after a pause. No-op when already running.
    pub fn resume(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total running (unpaused) time since the last `start`.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + started_at.elapsed(),
            None => self.accumulated,
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Time left before the deadline, saturating at zero. `None` when no
    /// deadline is configured.
    pub fn remaining(&self) -> Option<Duration> {
        self.timeout
            .map(|timeout| timeout.saturating_sub(self.elapsed()))
    }

    /// True once the deadline has been consumed. Always false without one.
    pub fn has_timeout(&self) -> bool {
        matches!(self.timeout, Some(timeout) if self.elapsed() >= timeout)
    }
}

impl Default for DeadlineTimer {
    fn default() -> Self {
        Self::new()
    }
}
