//! In-memory store
//!
//! Keeps encoded envelopes keyed by identifier, so boards go through the same
//! codec as on disk without touching the filesystem.

use std::collections::HashMap;

use super::{LeaderboardStore, StoreError, envelope};
use crate::highscores::Leaderboard;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place raw data under `identifier`, bypassing the encoder
    pub fn insert_raw(&mut self, identifier: &str, data: impl Into<String>) {
        self.slots.insert(identifier.to_string(), data.into());
    }

    /// Raw stored data, if any
    pub fn raw(&self, identifier: &str) -> Option<&str> {
        self.slots.get(identifier).map(String::as_str)
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self, identifier: &str) -> Result<Option<Leaderboard>, StoreError> {
        self.slots
            .get(identifier)
            .map(|data| envelope::decode(identifier, data))
            .transpose()
    }

    fn store(&mut self, leaderboard: &Leaderboard, identifier: &str) -> Result<(), StoreError> {
        let data = envelope::encode(leaderboard)?;
        self.slots.insert(identifier.to_string(), data);
        Ok(())
    }
}
