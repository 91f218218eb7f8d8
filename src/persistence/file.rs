//! JSON file backend for native hosts
//!
//! Items live in a versioned envelope. Every write goes to `<path>.tmp`
//! first and is then renamed over the save, so a crash mid-write leaves the
//! previous save intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Store;

/// Current envelope version
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    items: BTreeMap<String, String>,
}

/// Store persisted as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Load the save at `path`, starting empty if it is missing or unreadable
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<SaveFile>(&json) {
                Ok(save) if save.version <= SAVE_VERSION => {
                    log::info!("Loaded {} saved items from {}", save.items.len(), path.display());
                    save.items
                }
                Ok(save) => {
                    log::warn!(
                        "Save {} has unknown version {}, starting fresh",
                        path.display(),
                        save.version
                    );
                    BTreeMap::new()
                }
                Err(e) => {
                    log::warn!("Corrupt save {}: {}, starting fresh", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => {
                log::info!("No save found at {}, starting fresh", path.display());
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let save = SaveFile {
            version: SAVE_VERSION,
            items: self.items.clone(),
        };
        let json = match serde_json::to_string_pretty(&save) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode save: {}", e);
                return;
            }
        };
        let tmp = self.path.with_extension("tmp");
        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
            log::warn!("Failed to write save {}: {}", self.path.display(), e);
        }
    }
}

impl Store for JsonFileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove_item(&mut self, key: &str) {
        if self.items.remove(key).is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "arctic_jumper_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_values_survive_reload() {
        let path = scratch_path("reload");
        {
            let mut store = JsonFileStore::load(&path);
            store.set_high_score(17);
            store.set_music_volume(0.25);
        }
        let store = JsonFileStore::load(&path);
        assert_eq!(store.high_score(), Some(17));
        assert_eq!(store.music_volume(), Some(0.25));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let path = scratch_path("corrupt");
        fs::write(&path, "{{{{").expect("write scratch file");
        let store = JsonFileStore::load(&path);
        assert_eq!(store.high_score(), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_future_version_is_ignored() {
        let path = scratch_path("future");
        fs::write(
            &path,
            r#"{ "version": 99, "items": { "arcticJumperHighScore": "5" } }"#,
        )
        .expect("write scratch file");
        let store = JsonFileStore::load(&path);
        assert_eq!(store.high_score(), None);
        let _ = fs::remove_file(&path);
    }
}
