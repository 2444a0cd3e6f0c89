//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Holds each tick to at least one period, sleeping off whatever time the
/// previous tick did not use.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current period at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self.period.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Sleep out the rest of the period, then start the next one. Returns
    /// the time since the previous call.
    pub fn tick(&mut self) -> Duration {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let now = Instant::now();
        let elapsed = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last = Some(now);
        elapsed
    }

    /// Forget the previous tick, e.g. after a deliberate pause
    pub fn restart(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(16);

    #[test]
    fn test_first_tick_does_not_wait() {
        let clock = FrameClock::new(PERIOD);
        assert_eq!(clock.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_remaining_counts_down() {
        let start = Instant::now();
        let clock = FrameClock {
            period: PERIOD,
            last: Some(start),
        };
        assert_eq!(clock.remaining(start + Duration::from_millis(5)), Duration::from_millis(11));
        assert_eq!(clock.remaining(start + Duration::from_millis(30)), Duration::ZERO);
    }

    #[test]
    fn test_tick_paces_to_period() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        clock.tick();
        let elapsed = clock.tick();
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_restart_skips_wait() {
        let mut clock = FrameClock::new(Duration::from_secs(60));
        clock.tick();
        clock.restart();
        assert_eq!(clock.remaining(Instant::now()), Duration::ZERO);
    }
}
