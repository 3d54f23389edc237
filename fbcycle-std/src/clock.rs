use std::time::{Duration, Instant};

/// Time source for the frame loop.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;

    /// Blocks the calling thread for at least `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `spin_sleep`, which keeps the frame interval accurate
/// on schedulers with coarse sleep granularity.
#[derive(Clone, Copy, Debug)]
pub struct SpinClock {
    origin: Instant,
}

impl Default for SpinClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl SpinClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SpinClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        spin_sleep::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_clock_sleeps_at_least_the_duration() {
        let mut clock = SpinClock::new();
        let before = clock.now();
        clock.sleep(Duration::from_millis(5));
        assert!(clock.now() - before >= Duration::from_millis(5));
    }
}
