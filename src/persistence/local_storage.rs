//! Browser LocalStorage backend

use web_sys::Storage;

use super::Store;

/// Store backed by `window.localStorage`
///
/// When storage is unavailable (private mode, sandboxed iframe) reads return
/// `None` and writes are dropped.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - progress will not be saved");
        }
        Self { storage }
    }
}

impl Store for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to write {} to LocalStorage", key);
            }
        }
    }

    fn remove_item(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
