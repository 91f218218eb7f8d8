//! Arctic Jumper - an endless-runner arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (modes, physics, spawning, collisions, scoring)
//! - `presentation`: Draw/audio intents the simulation emits, asset ids
//! - `platform`: Frame limiter, key mapping, logging setup
//! - `persistence`: Key/value store contract and its backends
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod presentation;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 70;
    /// Fixed simulation timestep in milliseconds
    pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical viewport dimensions
    pub const VIEWPORT_WIDTH: i32 = 920;
    pub const VIEWPORT_HEIGHT: i32 = 540;

    /// Boot logo duration
    pub const BOOT_MS: u32 = 7500;
    /// Delay after death before a restart is accepted
    pub const GAME_OVER_COOLDOWN_MS: u32 = 1000;

    /// Player hit points
    pub const MAX_HITPOINTS: u8 = 3;
    /// Ticks of invulnerability after a hit
    pub const INVINCIBILITY_TICKS: u32 = 120;

    /// Obstacle pool capacity
    pub const ENEMY_CAPACITY: usize = 3;
}

/// Convert a millisecond duration to a whole number of ticks (rounded up)
#[inline]
pub fn ms_to_ticks(ms: u32, tick_rate: u32) -> u32 {
    u32::try_from((ms as u64 * tick_rate as u64).div_ceil(1000)).unwrap_or(u32::MAX)
}
