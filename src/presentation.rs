//! Presentation and audio collaborators
//!
//! The simulation never draws or plays sound itself. Each tick it calls out
//! through [`Presentation`] and [`AudioSink`] with plain data; hosts decide
//! how to render it. Assets are referenced by logical [`AssetId`] only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// HUD label shown next to the running score
pub const SCORE_LABEL: &str = "Score:";
/// HUD label shown next to the hit points
pub const HEALTH_LABEL: &str = "Health:";
/// HUD label shown next to the best score
pub const HIGHSCORE_LABEL: &str = "High Score:";
/// Menu hint occupying the score slot
pub const OPTIONS_HINT: &str = "Options: Enter Key";
/// Menu credit occupying the highscore slot
pub const AUTHOR_LINE: &str = "Made by: Matthew C-D";

/// Logical asset identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetId {
    // === Sprites ===
    BootLogo,
    TitleCard,
    PlayerSprite,
    PenguinSprite,
    RockSprite,
    SnowmanSprite,
    BackgroundFar,
    BackgroundMid,
    Foreground,
    // === Sound effects ===
    BootSfx,
    StartSfx,
    JumpSfx,
    ScoreSfx,
    HitSfx,
    GameOverSfx,
    // === Music ===
    TitleSong,
    MainSong,
}

impl AssetId {
    pub const ALL: [AssetId; 17] = [
        AssetId::BootLogo,
        AssetId::TitleCard,
        AssetId::PlayerSprite,
        AssetId::PenguinSprite,
        AssetId::RockSprite,
        AssetId::SnowmanSprite,
        AssetId::BackgroundFar,
        AssetId::BackgroundMid,
        AssetId::Foreground,
        AssetId::BootSfx,
        AssetId::StartSfx,
        AssetId::JumpSfx,
        AssetId::ScoreSfx,
        AssetId::HitSfx,
        AssetId::GameOverSfx,
        AssetId::TitleSong,
        AssetId::MainSong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetId::BootLogo => "boot-logo",
            AssetId::TitleCard => "title-card",
            AssetId::PlayerSprite => "player-sprite",
            AssetId::PenguinSprite => "penguin-sprite",
            AssetId::RockSprite => "rock-sprite",
            AssetId::SnowmanSprite => "snowman-sprite",
            AssetId::BackgroundFar => "background-far",
            AssetId::BackgroundMid => "background-mid",
            AssetId::Foreground => "foreground",
            AssetId::BootSfx => "boot-sfx",
            AssetId::StartSfx => "start-sfx",
            AssetId::JumpSfx => "jump-sfx",
            AssetId::ScoreSfx => "score-sfx",
            AssetId::HitSfx => "hit-sfx",
            AssetId::GameOverSfx => "game-over-sfx",
            AssetId::TitleSong => "title-song",
            AssetId::MainSong => "main-song",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Default file name shipped with the game
    fn default_file(&self) -> &'static str {
        match self {
            AssetId::BootLogo => "images/boot.png",
            AssetId::TitleCard => "images/title.png",
            AssetId::PlayerSprite => "images/player.png",
            AssetId::PenguinSprite => "images/penguin.png",
            AssetId::RockSprite => "images/rock.png",
            AssetId::SnowmanSprite => "images/snowman.png",
            AssetId::BackgroundFar => "images/bgl1.png",
            AssetId::BackgroundMid => "images/bgl2.png",
            AssetId::Foreground => "images/fgl1.png",
            AssetId::BootSfx => "audio/boot.wav",
            AssetId::StartSfx => "audio/start.wav",
            AssetId::JumpSfx => "audio/jump.wav",
            AssetId::ScoreSfx => "audio/score.wav",
            AssetId::HitSfx => "audio/hit.wav",
            AssetId::GameOverSfx => "audio/gameover.wav",
            AssetId::TitleSong => "audio/title.mp3",
            AssetId::MainSong => "audio/main.mp3",
        }
    }
}

/// Resolves a logical asset id to a host handle
pub trait AssetLocator {
    type Handle;

    fn locate(&self, id: AssetId) -> Option<Self::Handle>;
}

/// Asset id to relative file name table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    pub files: HashMap<AssetId, String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            files: AssetId::ALL
                .into_iter()
                .map(|id| (id, id.default_file().to_string()))
                .collect(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest; entries it omits fall back to the shipped defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: HashMap<AssetId, String> = serde_json::from_str(json)?;
        let mut manifest = Self::default();
        manifest.files.extend(overrides);
        Ok(manifest)
    }
}

impl AssetLocator for AssetManifest {
    type Handle = String;

    fn locate(&self, id: AssetId) -> Option<String> {
        self.files.get(&id).cloned()
    }
}

/// Drawing requests; none of these are queried for state
pub trait Presentation {
    fn draw_score(&mut self, text: &str, value: Option<u32>);
    fn draw_health(&mut self, text: &str, hp: u8);
    fn draw_highscore(&mut self, text: &str, value: Option<u32>);
    fn show_start_prompt(&mut self);
    fn show_pause_screen(&mut self);
    fn show_options_screen(&mut self);
    /// Clear the pause/options overlay text layer
    fn clear_overlay(&mut self);
    fn show_game_over_screen(&mut self, timer_done: bool, is_new_high_score: bool, score: u32);
    fn show_death_overlay(&mut self);
    fn hide_death_overlay(&mut self);
    fn draw_entity(&mut self, sprite: AssetId, x: i32, y: i32);
}

/// Fire-and-forget audio requests
pub trait AudioSink {
    fn play_sfx(&mut self, id: AssetId);
    fn play_track(&mut self, id: AssetId, looped: bool);
    fn stop_track(&mut self);
    fn set_music_volume(&mut self, volume: f32);
    fn set_sfx_volume(&mut self, volume: f32);
}

/// One recorded call into a collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Score(String, Option<u32>),
    Health(String, u8),
    Highscore(String, Option<u32>),
    StartPrompt,
    PauseScreen,
    OptionsScreen,
    ClearOverlay,
    GameOverScreen {
        timer_done: bool,
        new_high_score: bool,
        score: u32,
    },
    ShowDeathOverlay,
    HideDeathOverlay,
    Entity(AssetId, i32, i32),
    Sfx(AssetId),
    Track(AssetId, bool),
    StopTrack,
    MusicVolume(f32),
    SfxVolume(f32),
}

/// Collects intents for headless hosts and tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub intents: Vec<Intent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything recorded since the last drain
    pub fn drain(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }

    pub fn contains(&self, intent: &Intent) -> bool {
        self.intents.contains(intent)
    }

    /// Sound effects recorded so far, in order
    pub fn sfx(&self) -> Vec<AssetId> {
        self.intents
            .iter()
            .filter_map(|i| match i {
                Intent::Sfx(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl Presentation for RecordingSink {
    fn draw_score(&mut self, text: &str, value: Option<u32>) {
        self.intents.push(Intent::Score(text.to_string(), value));
    }

    fn draw_health(&mut self, text: &str, hp: u8) {
        self.intents.push(Intent::Health(text.to_string(), hp));
    }

    fn draw_highscore(&mut self, text: &str, value: Option<u32>) {
        self.intents.push(Intent::Highscore(text.to_string(), value));
    }

    fn show_start_prompt(&mut self) {
        self.intents.push(Intent::StartPrompt);
    }

    fn show_pause_screen(&mut self) {
        self.intents.push(Intent::PauseScreen);
    }

    fn show_options_screen(&mut self) {
        self.intents.push(Intent::OptionsScreen);
    }

    fn clear_overlay(&mut self) {
        self.intents.push(Intent::ClearOverlay);
    }

    fn show_game_over_screen(&mut self, timer_done: bool, is_new_high_score: bool, score: u32) {
        self.intents.push(Intent::GameOverScreen {
            timer_done,
            new_high_score: is_new_high_score,
            score,
        });
    }

    fn show_death_overlay(&mut self) {
        self.intents.push(Intent::ShowDeathOverlay);
    }

    fn hide_death_overlay(&mut self) {
        self.intents.push(Intent::HideDeathOverlay);
    }

    fn draw_entity(&mut self, sprite: AssetId, x: i32, y: i32) {
        self.intents.push(Intent::Entity(sprite, x, y));
    }
}

impl AudioSink for RecordingSink {
    fn play_sfx(&mut self, id: AssetId) {
        self.intents.push(Intent::Sfx(id));
    }

    fn play_track(&mut self, id: AssetId, looped: bool) {
        self.intents.push(Intent::Track(id, looped));
    }

    fn stop_track(&mut self) {
        self.intents.push(Intent::StopTrack);
    }

    fn set_music_volume(&mut self, volume: f32) {
        self.intents.push(Intent::MusicVolume(volume));
    }

    fn set_sfx_volume(&mut self, volume: f32) {
        self.intents.push(Intent::SfxVolume(volume));
    }
}
