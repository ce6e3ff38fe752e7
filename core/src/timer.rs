use core::time::Duration;
use serde::{Deserialize, Serialize};

const SECOND: Duration = Duration::from_secs(1);

/// Whole-seconds game clock driven by frame deltas.
///
/// Time only accumulates while running. Once a full second has built up the
/// counter advances by exactly one and the accumulator starts over, dropping
/// any excess, so the display counts coarse seconds rather than wall time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondsTimer {
    accumulated: Duration,
    elapsed_secs: u32,
    running: bool,
}

impl SecondsTimer {
    pub const fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            elapsed_secs: 0,
            running: false,
        }
    }

    pub const fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds one frame delta, returns whether the seconds counter advanced.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.accumulated = self.accumulated.saturating_add(delta);
        if self.accumulated < SECOND {
            return false;
        }

        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        self.accumulated = Duration::ZERO;
        true
    }
}
