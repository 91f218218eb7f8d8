//! The player: ground/jump state machine, hit points, invincibility window
//!
//! The jump is a stepped arc. Every `frame_wait` ticks the player moves
//! `force * step_px` vertically and `force` drops by one. At the apex the
//! player hangs for `apex_hold` steps, then the direction flips and `force`
//! resets, so the fall mirrors the rise exactly and lands on the take-off y.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::hitbox::Hitbox;
use super::timer::Countdown;
use crate::tuning::{JumpTuning, Tuning};

/// Hitbox inset from the sprite origin
pub const HITBOX_X_MARGIN: i32 = 20;
pub const HITBOX_Y_MARGIN: i32 = 75;
pub const HITBOX_WIDTH: i32 = 35;
pub const HITBOX_HEIGHT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpDirection {
    Up,
    Down,
}

impl JumpDirection {
    /// +1 rising, -1 falling (screen y shrinks while rising)
    pub fn sign(self) -> i32 {
        match self {
            JumpDirection::Up => 1,
            JumpDirection::Down => -1,
        }
    }
}

/// Airborne bookkeeping, reset on every landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpState {
    pub force: u8,
    pub direction: JumpDirection,
    /// Ticks left before the next vertical step
    pub frame_wait: u8,
    /// Apex steps left before falling
    pub apex_hold: u8,
}

impl JumpState {
    fn new(tuning: &JumpTuning) -> Self {
        Self {
            force: tuning.force,
            direction: JumpDirection::Up,
            // First step happens on the tick after take-off
            frame_wait: 1,
            apex_hold: tuning.apex_hold,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    /// Resting position once the intro slide is over
    pub start: IVec2,
    pub grounded: bool,
    pub jump: JumpState,
    pub hitbox: Hitbox,
    hitpoints: u8,
    max_hitpoints: u8,
    invincibility: Countdown,
    invincibility_ticks: u32,
    jump_tuning: JumpTuning,
    intro_speed: i32,
}

impl Player {
    /// Create the player off-screen, ready to slide in
    pub fn new(tuning: &Tuning) -> Self {
        let start = IVec2::new(tuning.player_start.0, tuning.player_start.1);
        let mut player = Self {
            pos: IVec2::new(tuning.player_intro_x.min(start.x), start.y),
            start,
            grounded: true,
            jump: JumpState::new(&tuning.jump),
            hitbox: Hitbox::default(),
            hitpoints: tuning.max_hitpoints,
            max_hitpoints: tuning.max_hitpoints,
            invincibility: Countdown::elapsed(),
            invincibility_ticks: tuning.invincibility_ticks,
            jump_tuning: tuning.jump,
            intro_speed: tuning.player_intro_speed,
        };
        player.refresh_hitbox();
        player
    }

    /// Restore a fresh life at the start position
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.grounded = true;
        self.jump = JumpState::new(&self.jump_tuning);
        self.restore_hitpoints();
        self.reset_invincibility();
        self.refresh_hitbox();
    }

    pub fn hitpoints(&self) -> u8 {
        self.hitpoints
    }

    pub fn max_hitpoints(&self) -> u8 {
        self.max_hitpoints
    }

    /// Set hit points from outside the simulation, clamped to [0, max]
    pub fn set_hitpoints(&mut self, hp: i32) {
        self.hitpoints = hp.clamp(0, self.max_hitpoints as i32) as u8;
    }

    pub fn restore_hitpoints(&mut self) {
        self.hitpoints = self.max_hitpoints;
    }

    pub fn is_alive(&self) -> bool {
        self.hitpoints > 0
    }

    /// Inside the invincibility window
    pub fn is_hurt(&self) -> bool {
        !self.invincibility.is_elapsed()
    }

    pub fn invincibility_remaining(&self) -> u32 {
        self.invincibility.remaining()
    }

    pub fn reset_invincibility(&mut self) {
        self.invincibility = Countdown::elapsed();
    }

    /// Lose one hit point unless invincible. Returns true if damage landed.
    pub fn take_damage(&mut self) -> bool {
        if self.is_hurt() || !self.is_alive() {
            return false;
        }
        self.hitpoints -= 1;
        self.invincibility = Countdown::new(self.invincibility_ticks);
        true
    }

    /// Start a jump; ignored while airborne. Returns true if accepted.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.grounded = false;
        self.jump = JumpState::new(&self.jump_tuning);
        true
    }

    /// Slide toward the start x; true once there
    pub fn move_to_start(&mut self) -> bool {
        if self.pos.x < self.start.x {
            self.pos.x = (self.pos.x + self.intro_speed).min(self.start.x);
            self.refresh_hitbox();
        }
        self.is_at_start()
    }

    pub fn is_at_start(&self) -> bool {
        self.pos.x >= self.start.x
    }

    /// Advance one tick of physics
    pub fn update(&mut self) {
        self.advance_jump();
        self.invincibility.tick();
        self.refresh_hitbox();
    }

    fn advance_jump(&mut self) {
        if self.grounded {
            return;
        }

        self.jump.frame_wait = self.jump.frame_wait.saturating_sub(1);
        if self.jump.frame_wait > 0 {
            return;
        }
        self.jump.frame_wait = self.jump_tuning.frame_wait;

        let force = self.jump.force as i32;
        self.pos.y -= force * self.jump_tuning.step_px * self.jump.direction.sign();

        match self.jump.direction {
            JumpDirection::Up => {
                if self.jump.force > 0 {
                    self.jump.force -= 1;
                } else {
                    self.jump.apex_hold = self.jump.apex_hold.saturating_sub(1);
                }
                if self.jump.force == 0 && self.jump.apex_hold == 0 {
                    self.jump.direction = JumpDirection::Down;
                    self.jump.force = self.jump_tuning.force;
                }
            }
            JumpDirection::Down => {
                self.jump.force = self.jump.force.saturating_sub(1);
                if self.jump.force == 0 {
                    self.grounded = true;
                    self.jump = JumpState::new(&self.jump_tuning);
                }
            }
        }
    }

    fn refresh_hitbox(&mut self) {
        let top = self.pos.y + HITBOX_Y_MARGIN;
        let left = self.pos.x + HITBOX_X_MARGIN;
        self.hitbox
            .update(top, top + HITBOX_HEIGHT, left, left + HITBOX_WIDTH);
    }
}
