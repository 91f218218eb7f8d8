//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a host can
//! override it from JSON without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::ms_to_ticks;
use crate::presentation::AssetId;

/// Largest per-force step; keeps `force * step_px` well inside `i32`
const MAX_STEP_PX: i32 = 64;

/// Jump arc constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpTuning {
    /// Force at take-off and after the apex flip; decremented once per step
    pub force: u8,
    /// Ticks between vertical steps
    pub frame_wait: u8,
    /// Steps spent hanging at the apex
    pub apex_hold: u8,
    /// Pixels moved per unit of force
    pub step_px: i32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            force: 8,
            frame_wait: 2,
            apex_hold: 5,
            step_px: 8,
        }
    }
}

/// One scrolling background layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerTuning {
    pub sprite: AssetId,
    pub y: i32,
    pub width: i32,
    /// Pixels scrolled per tick
    pub speed: i32,
}

/// Complete balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub tick_rate: u32,
    pub viewport_width: i32,
    pub boot_ms: u32,
    pub game_over_cooldown_ms: u32,

    // === Player ===
    pub player_start: (i32, i32),
    /// x the player enters from when the game starts
    pub player_intro_x: i32,
    /// Pixels per tick while sliding into the start position
    pub player_intro_speed: i32,
    pub max_hitpoints: u8,
    pub invincibility_ticks: u32,
    pub jump: JumpTuning,

    // === Obstacles ===
    /// Horizontal obstacle velocity (negative slides toward the player)
    pub enemy_speed: i32,
    pub enemy_spawn: (i32, i32),
    pub enemy_capacity: usize,
    /// Delay before the first spawn of a run
    pub initial_spawn_delay: u32,
    /// Candidate delays between spawns, picked uniformly
    pub spawn_delays: Vec<u32>,

    // === Title card ===
    pub title_shown: (i32, i32),
    pub title_hidden: (i32, i32),
    pub title_speed: i32,

    pub layers: Vec<LayerTuning>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            viewport_width: VIEWPORT_WIDTH,
            boot_ms: BOOT_MS,
            game_over_cooldown_ms: GAME_OVER_COOLDOWN_MS,

            player_start: (160, 340),
            player_intro_x: -80,
            player_intro_speed: 2,
            max_hitpoints: MAX_HITPOINTS,
            invincibility_ticks: INVINCIBILITY_TICKS,
            jump: JumpTuning::default(),

            enemy_speed: -10,
            enemy_spawn: (VIEWPORT_WIDTH, 395),
            enemy_capacity: ENEMY_CAPACITY,
            initial_spawn_delay: 35,
            spawn_delays: vec![80, 135, 175, 200],

            title_shown: (330, 60),
            title_hidden: (330, -138),
            title_speed: 2,

            layers: vec![
                LayerTuning {
                    sprite: AssetId::BackgroundFar,
                    y: 0,
                    width: VIEWPORT_WIDTH,
                    speed: 1,
                },
                LayerTuning {
                    sprite: AssetId::BackgroundMid,
                    y: 0,
                    width: VIEWPORT_WIDTH,
                    speed: 2,
                },
                LayerTuning {
                    sprite: AssetId::Foreground,
                    y: VIEWPORT_HEIGHT - 154,
                    width: VIEWPORT_WIDTH,
                    speed: 4,
                },
            ],
        }
    }
}

impl Tuning {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Clamp values that would break simulation invariants
    pub fn sanitize(&mut self) {
        self.tick_rate = self.tick_rate.max(1);
        self.max_hitpoints = self.max_hitpoints.max(1);
        self.jump.force = self.jump.force.max(1);
        self.jump.frame_wait = self.jump.frame_wait.max(1);
        self.jump.step_px = self.jump.step_px.clamp(1, MAX_STEP_PX);
        self.enemy_capacity = self.enemy_capacity.max(1);
        self.player_intro_speed = self.player_intro_speed.max(1);
        self.title_speed = self.title_speed.max(1);
        if self.spawn_delays.is_empty() {
            log::warn!("Empty spawn delay table, using defaults");
            self.spawn_delays = Tuning::default().spawn_delays;
        }
    }

    pub fn boot_ticks(&self) -> u32 {
        ms_to_ticks(self.boot_ms, self.tick_rate)
    }

    pub fn cooldown_ticks(&self) -> u32 {
        ms_to_ticks(self.game_over_cooldown_ms, self.tick_rate)
    }

    /// Milliseconds per simulation tick
    pub fn tick_ms(&self) -> f64 {
        1000.0 / self.tick_rate as f64
    }
}
