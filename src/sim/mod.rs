//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering, audio or storage access except through the [`Host`] traits

pub mod hitbox;
pub mod obstacle;
pub mod parallax;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;
pub mod title;

pub use hitbox::Hitbox;
pub use obstacle::{Obstacle, ObstacleKind, ObstacleShape};
pub use parallax::{Layer, Parallax};
pub use player::{JumpDirection, JumpState, Player};
pub use spawner::{EnemyPool, SpawnOutcome, Spawner};
pub use state::{Flags, GameSession, Mode, ModeKind};
pub use tick::{Host, InputEvent, score_passes, tick};
pub use timer::Countdown;
pub use title::TitleCard;
