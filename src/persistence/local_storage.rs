//! Browser LocalStorage store (wasm32 only)

use super::{LeaderboardStore, StoreError, envelope};
use crate::highscores::Leaderboard;

/// Stores each leaderboard under a LocalStorage key equal to its identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl LeaderboardStore for LocalStorageStore {
    fn load(&self, identifier: &str) -> Result<Option<Leaderboard>, StoreError> {
        let storage = Self::storage()?;
        let json = match storage.get_item(identifier) {
            Ok(Some(json)) => json,
            Ok(None) => return Ok(None),
            Err(_) => return Err(StoreError::Unavailable),
        };

        let board = envelope::decode(identifier, &json)?;
        log::info!("Loaded {} high scores", board.len());
        Ok(Some(board))
    }

    fn store(&mut self, leaderboard: &Leaderboard, identifier: &str) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = envelope::encode(leaderboard)?;
        storage.set_item(identifier, &json).map_err(|_| {
            StoreError::io(
                identifier,
                std::io::Error::other("LocalStorage rejected the write"),
            )
        })?;
        log::info!("High scores saved ({} entries)", leaderboard.len());
        Ok(())
    }
}
