//! Single timed value transitions

use std::time::Duration;

use super::easing::Easing;

/// Interpolates from one value to another over a duration, after a delay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay plus duration
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Linear progress in [0, 1] at `elapsed` since the tween was started
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let running = (elapsed - self.delay).as_secs_f64();
        (running / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased value at `elapsed` since the tween was started
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if self.is_complete(elapsed) {
            return self.to;
        }
        let t = self.easing.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * t
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }
}
