use embassy_time::{Duration, Instant};

use crate::math8::approach8;

// Gate between easing steps and the largest change per step. A full
// 0-255 swing converges in about 1.7 s.
const UPDATE_INTERVAL: Duration = Duration::from_millis(20);
const MAX_STEP: u8 = 3;

/// Time-gated easing of the applied output brightness
pub struct BrightnessGovernor {
    last_update: Instant,
    target: u8,
    actual: u8,
}

impl BrightnessGovernor {
    pub const fn new(initial: u8) -> Self {
        Self {
            last_update: Instant::from_millis(0),
            target: initial,
            actual: initial,
        }
    }

    /// Advance the easing once the gate has elapsed
    ///
    /// The desired value is `level_brightness` while enabled and 0
    /// otherwise. Returns the value to apply on every gated firing, even
    /// an unchanged one, and `None` while the gate is closed.
    pub fn tick(&mut self, now: Instant, enabled: bool, level_brightness: u8) -> Option<u8> {
        if now.duration_since(self.last_update) < UPDATE_INTERVAL {
            return None;
        }
        self.last_update = now;

        self.target = if enabled { level_brightness } else { 0 };
        self.actual = approach8(self.actual, self.target, MAX_STEP);
        Some(self.actual)
    }

    /// Reset the convergence goal without waiting for the gate
    ///
    /// The next gated tick recomputes the goal; this only keeps the
    /// reported target honest in between.
    pub fn set_target(&mut self, target: u8) {
        self.target = target;
    }

    pub const fn actual(&self) -> u8 {
        self.actual
    }

    pub const fn target(&self) -> u8 {
        self.target
    }
}
