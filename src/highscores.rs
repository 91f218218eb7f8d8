//! Best-score bookkeeping
//!
//! The persisted best is read once at session start and cached; the cache is
//! what in-session comparisons use, so the store is only written when a run
//! actually beats it.

use serde::{Deserialize, Serialize};

use crate::persistence::Store;

/// Cached copy of the persisted best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    cached: u32,
}

impl HighScore {
    /// Read the persisted best; absence means zero
    pub fn load(store: &dyn Store) -> Self {
        let cached = store.high_score().unwrap_or(0);
        log::info!("Loaded high score {}", cached);
        Self { cached }
    }

    pub fn best(&self) -> u32 {
        self.cached
    }

    /// Check if a finished run beats the best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.cached
    }

    /// Persist `score` if it strictly beats the best.
    /// Returns true when a new best was written.
    pub fn record(&mut self, score: u32, store: &mut dyn Store) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        store.set_high_score(score);
        self.cached = score;
        log::info!("New high score {}", score);
        true
    }

    /// Explicit reset from the options screen
    pub fn delete(&mut self, store: &mut dyn Store) {
        store.delete_high_score();
        self.cached = 0;
        log::info!("High score reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_missing_value_loads_as_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_record_only_on_strict_improvement() {
        let mut store = MemoryStore::new();
        store.set_high_score(5);
        let mut hs = HighScore::load(&store);

        assert!(!hs.record(5, &mut store));
        assert!(!hs.record(3, &mut store));
        assert_eq!(store.high_score(), Some(5));

        assert!(hs.record(6, &mut store));
        assert_eq!(hs.best(), 6);
        assert_eq!(store.high_score(), Some(6));
    }

    #[test]
    fn test_record_skips_store_when_not_beaten() {
        let mut store = MemoryStore::new();
        let mut hs = HighScore::load(&store);
        assert!(!hs.record(0, &mut store));
        assert_eq!(store.high_score(), None);
    }

    #[test]
    fn test_delete_resets_store_and_cache() {
        let mut store = MemoryStore::new();
        let mut hs = HighScore::load(&store);
        hs.record(9, &mut store);
        hs.delete(&mut store);
        assert_eq!(hs.best(), 0);
        assert_eq!(store.high_score(), Some(0));
    }
}
