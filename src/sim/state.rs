//! Session state and the mode state machine
//!
//! Exactly one [`Mode`] is active at a time. Flags that only make sense in
//! one mode live inside that mode's variant, so leaving the mode discards
//! them and they cannot leak into another.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::parallax::Parallax;
use super::player::Player;
use super::spawner::{EnemyPool, Spawner};
use super::tick::{Host, InputEvent};
use super::timer::Countdown;
use super::title::TitleCard;
use crate::highscores::HighScore;
use crate::persistence::Store;
use crate::presentation::{AssetId, HIGHSCORE_LABEL};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Top-level game mode with its mode-local flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Boot logo; moves to Menu when the timer runs out
    Boot { timer: Countdown },
    /// Title screen
    Menu {
        /// Title card finished sliding in
        title_done: bool,
        /// Start accepted; title sliding out, player sliding in
        starting: bool,
        options_open: bool,
    },
    /// Active run
    Play { paused: bool, options_open: bool },
    /// Run over
    Death {
        /// Restart is refused until this elapses
        cooldown: Countdown,
        new_high_score: bool,
    },
}

/// Mode discriminant without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    Boot,
    Menu,
    Play,
    Death,
}

/// Flat view of every secondary flag; false wherever a mode doesn't define it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    pub title_sequence_done: bool,
    pub game_starting: bool,
    pub is_paused: bool,
    pub is_options_open: bool,
    pub new_high_score_achieved: bool,
    pub game_over_timer_elapsed: bool,
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Boot { .. } => ModeKind::Boot,
            Mode::Menu { .. } => ModeKind::Menu,
            Mode::Play { .. } => ModeKind::Play,
            Mode::Death { .. } => ModeKind::Death,
        }
    }

    pub fn flags(&self) -> Flags {
        match *self {
            Mode::Boot { .. } => Flags::default(),
            Mode::Menu {
                title_done,
                starting,
                options_open,
            } => Flags {
                title_sequence_done: title_done,
                game_starting: starting,
                is_options_open: options_open,
                ..Flags::default()
            },
            Mode::Play {
                paused,
                options_open,
            } => Flags {
                is_paused: paused,
                is_options_open: options_open,
                ..Flags::default()
            },
            Mode::Death {
                cooldown,
                new_high_score,
            } => Flags {
                new_high_score_achieved: new_high_score,
                game_over_timer_elapsed: cooldown.is_elapsed(),
                ..Flags::default()
            },
        }
    }

    /// Background, obstacles and player hold still
    pub fn motion_frozen(&self) -> bool {
        match *self {
            Mode::Boot { .. } | Mode::Death { .. } => true,
            Mode::Menu { options_open, .. } => options_open,
            Mode::Play { paused, .. } => paused,
        }
    }
}

/// Everything one game session owns
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    pub mode: Mode,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: EnemyPool,
    pub spawner: Spawner,
    /// Obstacles passed this run
    pub score: u32,
    pub high_score: HighScore,
    pub settings: Settings,
    pub title_card: TitleCard,
    pub parallax: Parallax,
    /// Inputs received since the last tick
    pending: VecDeque<InputEvent>,
}

impl GameSession {
    /// Create a session in Boot mode, reading the best score and settings
    pub fn new(mut tuning: Tuning, seed: u64, store: &dyn Store) -> Self {
        tuning.sanitize();
        log::info!("New session (seed {})", seed);
        Self {
            mode: Mode::Boot {
                timer: Countdown::new(tuning.boot_ticks()),
            },
            time_ticks: 0,
            player: Player::new(&tuning),
            enemies: EnemyPool::new(tuning.enemy_capacity),
            spawner: Spawner::new(&tuning, seed),
            score: 0,
            high_score: HighScore::load(store),
            settings: Settings::load(store),
            title_card: TitleCard::new(&tuning),
            parallax: Parallax::new(&tuning.layers),
            pending: VecDeque::new(),
            tuning,
        }
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn flags(&self) -> Flags {
        self.mode.flags()
    }

    /// Queue an input; it is applied at the start of the next tick
    pub fn push_input(&mut self, input: InputEvent) {
        self.pending.push_back(input);
    }

    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn take_inputs(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }

    /// Live obstacles in slot order
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.enemies.iter()
    }

    pub(crate) fn enter_menu(&mut self, host: &mut Host) {
        self.title_card.slide_in();
        host.audio.play_track(AssetId::TitleSong, true);
        self.mode = Mode::Menu {
            title_done: false,
            starting: false,
            options_open: false,
        };
        log::info!("Boot complete, entering menu");
    }

    pub(crate) fn enter_play(&mut self) {
        self.enemies.clear();
        self.spawner.reset();
        self.score = 0;
        self.mode = Mode::Play {
            paused: false,
            options_open: false,
        };
        log::info!("Run started");
    }

    pub(crate) fn enter_death(&mut self, host: &mut Host) {
        let new_high_score = self.high_score.record(self.score, host.store);
        host.audio.play_sfx(AssetId::GameOverSfx);
        host.view.show_death_overlay();
        self.mode = Mode::Death {
            cooldown: Countdown::new(self.tuning.cooldown_ticks()),
            new_high_score,
        };
        log::info!(
            "Game over at tick {} with score {} (best {})",
            self.time_ticks,
            self.score,
            self.high_score.best()
        );
    }

    /// Jump straight to a fresh run, skipping boot and the title sequence
    pub fn skip_intro(&mut self) {
        self.title_card = TitleCard::new(&self.tuning);
        self.player.reset();
        self.enter_play();
    }

    /// Start a new run from the game over screen.
    /// Ignored unless dead and past the cooldown; returns true if accepted.
    pub fn restart(&mut self, host: &mut Host) -> bool {
        match self.mode {
            Mode::Death { cooldown, .. } if cooldown.is_elapsed() => {}
            _ => return false,
        }
        self.player.reset();
        self.enter_play();
        host.view.hide_death_overlay();
        host.view.clear_overlay();
        true
    }

    /// Options slider: persist and apply the music volume
    pub fn set_music_volume(&mut self, volume: f32, host: &mut Host) {
        let volume = self.settings.set_music_volume(volume, host.store);
        host.audio.set_music_volume(volume);
    }

    /// Options slider: persist and apply the sfx volume
    pub fn set_sfx_volume(&mut self, volume: f32, host: &mut Host) {
        let volume = self.settings.set_sfx_volume(volume, host.store);
        host.audio.set_sfx_volume(volume);
    }

    /// Options reset button: wipe the best score
    pub fn delete_high_score(&mut self, host: &mut Host) {
        self.high_score.delete(host.store);
        if self.mode_kind() != ModeKind::Menu {
            host.view.draw_highscore(HIGHSCORE_LABEL, Some(0));
        }
    }
}
