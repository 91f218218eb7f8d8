//! Enemy pool and spawn scheduler
//!
//! The pool is a fixed array of slots. A spawn that finds every slot taken
//! is dropped, never queued, which caps how many obstacles can be on screen.
//! Spawn delays come from a small discrete table so the rhythm stays learnable.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ObstacleKind};
use super::timer::Countdown;
use crate::tuning::Tuning;

/// Fixed-capacity obstacle slots
#[derive(Debug, Clone)]
pub struct EnemyPool {
    slots: Vec<Option<Obstacle>>,
}

impl EnemyPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == self.capacity()
    }

    /// Place in the first free slot; hands the obstacle back if full
    pub fn insert(&mut self, obstacle: Obstacle) -> Result<usize, Obstacle> {
        match self.slots.iter().position(Option::is_none) {
            Some(i) => {
                self.slots[i] = Some(obstacle);
                Ok(i)
            }
            None => Err(obstacle),
        }
    }

    pub fn get(&self, slot: usize) -> Option<&Obstacle> {
        self.slots.get(slot)?.as_ref()
    }

    pub fn despawn(&mut self, slot: usize) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = None;
        }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Live obstacles in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.slots.iter_mut().flatten()
    }

    /// Slide every live obstacle and free the slots of those that left the
    /// screen. Returns how many were despawned.
    pub fn advance(&mut self, viewport_width: i32) -> usize {
        let mut despawned = 0;
        for slot in &mut self.slots {
            if let Some(obstacle) = slot {
                obstacle.slide_towards_player();
                if obstacle.is_out_of_bounds(viewport_width) {
                    *slot = None;
                    despawned += 1;
                }
            }
        }
        despawned
    }
}

/// What the scheduler did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Waiting,
    Spawned { kind: ObstacleKind, slot: usize },
    /// Pool was full; the obstacle was discarded
    Dropped { kind: ObstacleKind },
}

#[derive(Debug, Clone)]
pub struct Spawner {
    countdown: Countdown,
    initial_delay: u32,
    delays: Vec<u32>,
    spawn_point: IVec2,
    speed: i32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let initial_delay = tuning.initial_spawn_delay.max(1);
        Self {
            countdown: Countdown::new(initial_delay),
            initial_delay,
            delays: tuning.spawn_delays.iter().map(|d| (*d).max(1)).collect(),
            spawn_point: IVec2::new(tuning.enemy_spawn.0, tuning.enemy_spawn.1),
            speed: tuning.enemy_speed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Restart the countdown for a new run (RNG stream continues)
    pub fn reset(&mut self) {
        self.countdown = Countdown::new(self.initial_delay);
    }

    pub fn ticks_until_spawn(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Advance one tick, spawning into `pool` when the countdown elapses
    pub fn advance(&mut self, pool: &mut EnemyPool) -> SpawnOutcome {
        if !self.countdown.tick() {
            return SpawnOutcome::Waiting;
        }

        let kind = ObstacleKind::ALL[self.rng.random_range(0..ObstacleKind::ALL.len())];
        let obstacle = Obstacle::spawn(kind, self.spawn_point, self.speed);
        let outcome = match pool.insert(obstacle) {
            Ok(slot) => {
                log::debug!("Spawned {:?} in slot {}", kind, slot);
                SpawnOutcome::Spawned { kind, slot }
            }
            Err(_) => {
                log::debug!("Pool full, dropped {:?}", kind);
                SpawnOutcome::Dropped { kind }
            }
        };

        self.countdown = Countdown::new(self.next_delay());
        outcome
    }

    fn next_delay(&mut self) -> u32 {
        if self.delays.is_empty() {
            return self.initial_delay;
        }
        self.delays[self.rng.random_range(0..self.delays.len())]
    }
}
