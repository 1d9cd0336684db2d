//! Arcade Leaderboard - bounded, persisted high scores for an arcade game
//!
//! Core modules:
//! - `score`: a single ranked result
//! - `highscores`: the leaderboard (qualification, admission, display order)
//! - `persistence`: load/store collaborators (file, memory, LocalStorage)
//! - `settings`: capacity and storage identifier

pub mod highscores;
pub mod persistence;
pub mod score;
pub mod settings;

pub use highscores::{Admission, Leaderboard, MAX_HIGH_SCORES, RankedEntry, RunResult};
pub use persistence::{
    CorruptReason, DEFAULT_LEADERBOARD_FILE, FileStore, LeaderboardStore, MemoryStore, StoreError,
};
pub use score::Score;
pub use settings::Settings;
