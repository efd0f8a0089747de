use std::time::{Duration, Instant};

/// Fixed-period scheduler. The caller asks how long until the next tick, waits
/// (for input, usually) and then asks whether a tick is due.
pub struct FixedTicker {
    period: Duration,
    next: Instant,
}

impl FixedTicker {
    pub fn new(period: Duration, now: Instant) -> Self {
        FixedTicker { period, next: now + period }
    }

    pub fn time_left(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Returns true at most once per period. A caller that falls behind is not
    /// made to catch up with a burst of ticks.
    pub fn is_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }

    /// Starts a fresh period from `now`, e.g. after a pause.
    pub fn restart(&mut self, now: Instant) {
        self.next = now + self.period;
    }
}
