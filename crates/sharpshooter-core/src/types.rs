//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D vector in simulation space. The world is y-down: negative y is up.
pub type Vector3 = glam::DVec3;

/// 2D vector in overlay (screen pixel) space.
pub type Vector2 = glam::DVec2;

/// Remaining durations below this are treated as elapsed, so a countdown of
/// exactly N ticks expires on tick N despite accumulated rounding.
pub const COUNTDOWN_EPSILON: f64 = 1e-9;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// A duration counted down once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    pub remaining_secs: f64,
}

impl Countdown {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            remaining_secs: duration_secs,
        }
    }

    /// Subtract `dt` and report whether the countdown has now elapsed.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.remaining_secs -= dt;
        if self.is_elapsed() {
            self.remaining_secs = 0.0;
        }
        self.is_elapsed()
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining_secs <= COUNTDOWN_EPSILON
    }
}
