//! Obstacles sliding toward the player
//!
//! All kinds share one behavior; they differ only by the numbers in
//! [`ObstacleKind::shape`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::hitbox::Hitbox;
use crate::presentation::AssetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Penguin,
    Rock,
    Snowman,
}

/// Per-kind sprite and hitbox geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleShape {
    pub sprite: AssetId,
    pub width: i32,
    /// Sprite y relative to the shared spawn y
    pub spawn_dy: i32,
    /// Hitbox top/bottom relative to the sprite y
    pub hitbox_top: i32,
    pub hitbox_bottom: i32,
    /// Horizontal inset applied to both hitbox sides
    pub hitbox_inset: i32,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Penguin,
        ObstacleKind::Rock,
        ObstacleKind::Snowman,
    ];

    pub const fn shape(self) -> ObstacleShape {
        match self {
            ObstacleKind::Penguin => ObstacleShape {
                sprite: AssetId::PenguinSprite,
                width: 164,
                spawn_dy: 0,
                hitbox_top: 25,
                hitbox_bottom: 70,
                hitbox_inset: 20,
            },
            ObstacleKind::Rock => ObstacleShape {
                sprite: AssetId::RockSprite,
                width: 96,
                spawn_dy: 10,
                hitbox_top: 10,
                hitbox_bottom: 62,
                hitbox_inset: 4,
            },
            ObstacleKind::Snowman => ObstacleShape {
                sprite: AssetId::SnowmanSprite,
                width: 72,
                spawn_dy: -55,
                hitbox_top: 10,
                hitbox_bottom: 124,
                hitbox_inset: 12,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: IVec2,
    /// Horizontal velocity per tick (negative moves toward the player)
    pub speed: i32,
    pub hitbox: Hitbox,
    /// Latched once the player has scored off this obstacle
    pub passed_by_player: bool,
}

impl Obstacle {
    /// Create an obstacle at the shared spawn point, adjusted for its kind
    pub fn spawn(kind: ObstacleKind, spawn: IVec2, speed: i32) -> Self {
        let shape = kind.shape();
        let pos = IVec2::new(spawn.x, spawn.y + shape.spawn_dy);
        let hitbox = Hitbox::new(
            pos.y + shape.hitbox_top,
            pos.y + shape.hitbox_bottom,
            pos.x + shape.hitbox_inset,
            pos.x + shape.width - shape.hitbox_inset,
        );
        Self {
            kind,
            pos,
            speed,
            hitbox,
            passed_by_player: false,
        }
    }

    pub fn width(&self) -> i32 {
        self.kind.shape().width
    }

    pub fn sprite(&self) -> AssetId {
        self.kind.shape().sprite
    }

    pub fn slide_towards_player(&mut self) {
        self.pos.x += self.speed;
        self.hitbox.translate_x(self.speed);
    }

    /// Fully outside `[-width, viewport_width]`
    pub fn is_out_of_bounds(&self, viewport_width: i32) -> bool {
        self.pos.x + self.width() < 0 || self.pos.x > viewport_width
    }

    /// Latch the pass flag if the player's front edge is past the midpoint.
    /// Returns true only on the tick the flag flips.
    pub fn check_passed(&mut self, player: &Hitbox) -> bool {
        if self.passed_by_player || player.right <= self.hitbox.midpoint() {
            return false;
        }
        self.passed_by_player = true;
        true
    }
}
