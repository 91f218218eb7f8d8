//! Tick-counted deadlines
//!
//! Replaces wall-clock sleeps: the orchestrator polls a countdown once per
//! tick instead of awaiting a timer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Already elapsed
    pub fn elapsed() -> Self {
        Self { remaining: 0 }
    }

    /// Advance one tick; true on the tick the countdown reaches zero
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
