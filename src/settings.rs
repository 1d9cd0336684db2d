//! Leaderboard settings
//!
//! Read from an optional JSON file; missing keys take their defaults.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::highscores::MAX_HIGH_SCORES;
use crate::persistence::DEFAULT_LEADERBOARD_FILE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of high scores kept
    pub capacity: usize,
    /// Identifier the leaderboard is stored under
    pub leaderboard_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: MAX_HIGH_SCORES,
            leaderboard_file: DEFAULT_LEADERBOARD_FILE.to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unparsable settings {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }
}
