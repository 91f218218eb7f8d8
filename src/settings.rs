//! Player preferences
//!
//! Persisted separately from scores, one store key per value.

use serde::{Deserialize, Serialize};

use crate::persistence::Store;

/// Volume used when nothing has been saved yet
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: DEFAULT_VOLUME,
            sfx_volume: DEFAULT_VOLUME,
        }
    }
}

impl Settings {
    /// Load settings, defaulting each missing value
    pub fn load(store: &dyn Store) -> Self {
        let settings = Self {
            music_volume: store.music_volume().unwrap_or(DEFAULT_VOLUME),
            sfx_volume: store.sfx_volume().unwrap_or(DEFAULT_VOLUME),
        };
        log::info!(
            "Loaded settings (music {:.2}, sfx {:.2})",
            settings.music_volume,
            settings.sfx_volume
        );
        settings
    }

    /// Set and persist the music volume; returns the clamped value
    pub fn set_music_volume(&mut self, volume: f32, store: &mut dyn Store) -> f32 {
        self.music_volume = clamp_volume(volume, self.music_volume);
        store.set_music_volume(self.music_volume);
        self.music_volume
    }

    /// Set and persist the sfx volume; returns the clamped value
    pub fn set_sfx_volume(&mut self, volume: f32, store: &mut dyn Store) -> f32 {
        self.sfx_volume = clamp_volume(volume, self.sfx_volume);
        store.set_sfx_volume(self.sfx_volume);
        self.sfx_volume
    }
}

fn clamp_volume(volume: f32, fallback: f32) -> f32 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        fallback
    }
}
