//! Leaderboard persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Validation of stored boards (capacity, ordering)
//! - Atomic file writes (tmp → rename)
//! - Missing state reported separately from corrupt state

pub mod envelope;
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

pub use envelope::{CorruptReason, ENVELOPE_VERSION};
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;

use crate::highscores::Leaderboard;

/// Well-known identifier of the single leaderboard
pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.json";

/// Errors surfaced by a [`LeaderboardStore`]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access leaderboard '{identifier}': {source}")]
    Io {
        identifier: String,
        #[source]
        source: std::io::Error,
    },
    #[error("stored leaderboard '{identifier}' is corrupt: {reason}")]
    Corrupt {
        identifier: String,
        #[source]
        reason: CorruptReason,
    },
    #[error("failed to encode leaderboard: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("leaderboard storage is unavailable")]
    Unavailable,
}

impl StoreError {
    pub(crate) fn corrupt(identifier: &str, reason: CorruptReason) -> Self {
        Self::Corrupt {
            identifier: identifier.to_string(),
            reason,
        }
    }

    pub(crate) fn io(identifier: &str, source: std::io::Error) -> Self {
        Self::Io {
            identifier: identifier.to_string(),
            source,
        }
    }

    /// Whether stored state exists but could not be used
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

/// Durable home for a leaderboard, addressed by identifier
pub trait LeaderboardStore {
    /// Load the board stored under `identifier`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self, identifier: &str) -> Result<Option<Leaderboard>, StoreError>;

    /// Persist `leaderboard` so a later `load` returns an equal board.
    fn store(&mut self, leaderboard: &Leaderboard, identifier: &str) -> Result<(), StoreError>;
}
