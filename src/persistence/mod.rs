//! Key/value persistence
//!
//! The game only needs a tiny synchronous string store (the shape of browser
//! LocalStorage). Typed accessors sit on top as provided trait methods, so
//! every backend gets identical parsing and defaulting rules:
//! - Missing or unparsable values read as `None`; callers pick the default
//! - Writes never fail loudly; backends log and carry on

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Storage key for the best score
pub const HIGH_SCORE_KEY: &str = "arcticJumperHighScore";
/// Storage key for the music volume
pub const MUSIC_VOLUME_KEY: &str = "arcticJumperMusicVolume";
/// Storage key for the sound effect volume
pub const SFX_VOLUME_KEY: &str = "arcticJumperSFXVolume";

/// Synchronous string key/value store
pub trait Store {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);

    fn high_score(&self) -> Option<u32> {
        self.get_item(HIGH_SCORE_KEY)?.trim().parse().ok()
    }

    fn set_high_score(&mut self, score: u32) {
        self.set_item(HIGH_SCORE_KEY, &score.to_string());
    }

    /// Reset the stored best score to zero
    fn delete_high_score(&mut self) {
        self.set_high_score(0);
    }

    fn music_volume(&self) -> Option<f32> {
        parse_volume(self.get_item(MUSIC_VOLUME_KEY)?)
    }

    fn set_music_volume(&mut self, volume: f32) {
        self.set_item(MUSIC_VOLUME_KEY, &volume.to_string());
    }

    fn sfx_volume(&self) -> Option<f32> {
        parse_volume(self.get_item(SFX_VOLUME_KEY)?)
    }

    fn set_sfx_volume(&mut self, volume: f32) {
        self.set_item(SFX_VOLUME_KEY, &volume.to_string());
    }
}

fn parse_volume(raw: String) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
}

/// In-memory store (tests, headless runs, storage-less browsers)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}
