//! Platform abstraction layer
//!
//! Host-side glue that stays out of the simulation:
//! - Fixed-tick frame limiter driven by host timestamps
//! - Physical key to [`InputEvent`] mapping
//! - Logger setup (env_logger natively, console_log in the browser)

use crate::consts::MAX_SUBSTEPS;
use crate::sim::InputEvent;

/// Longest frame gap fed into the accumulator, in ms.
/// Anything larger (tab in background, debugger pause) is treated as this.
const MAX_FRAME_MS: f64 = 100.0;

/// Turns display-rate host timestamps into whole simulation ticks
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    tick_ms: f64,
    accumulator: f64,
    last_time: Option<f64>,
}

impl FrameLimiter {
    pub fn new(tick_ms: f64) -> Self {
        Self {
            tick_ms: tick_ms.max(f64::EPSILON),
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Feed the host frame timestamp (ms); returns how many ticks to run now.
    /// The first call only primes the clock.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_time.replace(now_ms) else {
            return 0;
        };
        let dt = (now_ms - last).clamp(0.0, MAX_FRAME_MS);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.tick_ms && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.tick_ms;
            substeps += 1;
        }
        // Drop backlog the cap refused so a stall can't snowball
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.tick_ms);
        }
        substeps
    }
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Key::Space),
            "Enter" | "NumpadEnter" => Some(Key::Enter),
            _ => None,
        }
    }

    /// The queued event for this key. Its meaning (start, jump, resume,
    /// restart, pause or options) is settled when the tick drains the
    /// queue, against the mode left by any earlier press.
    pub fn input(self) -> InputEvent {
        match self {
            Key::Space => InputEvent::Confirm,
            Key::Enter => InputEvent::PauseOrOptions,
        }
    }
}

/// Install the logger for this target. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Install the logger for this target. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already installed");
    }
}
