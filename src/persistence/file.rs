//! File-backed store
//!
//! Each identifier is a file name inside the store directory. Writes land in a
//! sibling `.tmp` file first and are renamed over the target.

use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{LeaderboardStore, StoreError, envelope};
use crate::highscores::Leaderboard;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file backing `identifier`
    pub fn path_for(&self, identifier: &str) -> PathBuf {
        self.dir.join(identifier)
    }

    fn tmp_path_for(&self, identifier: &str) -> PathBuf {
        self.dir.join(format!("{identifier}.tmp"))
    }
}

/// Write `data` and flush it to disk before returning
fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}

impl LeaderboardStore for FileStore {
    fn load(&self, identifier: &str) -> Result<Option<Leaderboard>, StoreError> {
        let path = self.path_for(identifier);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(identifier, e)),
        };

        let board = envelope::decode(identifier, &data)?;
        log::info!(
            "Loaded {} high scores from {}",
            board.len(),
            path.display()
        );
        Ok(Some(board))
    }

    fn store(&mut self, leaderboard: &Leaderboard, identifier: &str) -> Result<(), StoreError> {
        let data = envelope::encode(leaderboard)?;
        let path = self.path_for(identifier);
        let tmp = self.tmp_path_for(identifier);

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(identifier, e))?;
        write_synced(&tmp, data.as_bytes()).map_err(|e| StoreError::io(identifier, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::io(identifier, e));
        }

        log::info!(
            "High scores saved ({} entries) to {}",
            leaderboard.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::{MAX_HIGH_SCORES, RunResult};
    use crate::persistence::DEFAULT_LEADERBOARD_FILE;

    /// Fresh scratch directory per test
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "arcade-leaderboard-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn sample_board() -> Leaderboard {
        let mut board = Leaderboard::new();
        for (score, level, initials) in [(300, 2, "bbb"), (50, 1, "ddd"), (500, 4, "aaa")] {
            board.add_score(RunResult { score, level }, &mut String::from(initials));
        }
        board
    }

    #[test]
    fn test_load_missing_file_is_absent() {
        let dir = scratch_dir("missing");
        let store = FileStore::new(&dir);

        assert!(store.load(DEFAULT_LEADERBOARD_FILE).unwrap().is_none());
        let board =
            Leaderboard::create_persisted_object(&store, DEFAULT_LEADERBOARD_FILE, MAX_HIGH_SCORES)
                .unwrap();
        assert!(board.is_empty());
        assert_eq!(board.capacity(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let dir = scratch_dir("round-trip");
        let mut store = FileStore::new(&dir);
        let board = sample_board();

        board.store(&mut store, DEFAULT_LEADERBOARD_FILE).unwrap();
        assert!(store.path_for(DEFAULT_LEADERBOARD_FILE).exists());
        assert!(!dir.join("leaderboard.json.tmp").exists());

        let loaded = Leaderboard::load(&store, DEFAULT_LEADERBOARD_FILE).unwrap();
        assert_eq!(loaded, Some(board));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_store_overwrites_previous_board() {
        let dir = scratch_dir("overwrite");
        let mut store = FileStore::new(&dir);
        let mut board = sample_board();
        board.store(&mut store, DEFAULT_LEADERBOARD_FILE).unwrap();

        board.add_score(RunResult { score: 999, level: 9 }, &mut String::from("top"));
        board.store(&mut store, DEFAULT_LEADERBOARD_FILE).unwrap();

        let loaded = store.load(DEFAULT_LEADERBOARD_FILE).unwrap().unwrap();
        assert_eq!(loaded.top_score(), Some(999));
        assert_eq!(loaded.len(), 4);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_synced_replaces_contents() {
        let dir = scratch_dir("synced");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("data.tmp");

        write_synced(&path, b"first, longer contents").unwrap();
        write_synced(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DEFAULT_LEADERBOARD_FILE), "\u{0}garbage").unwrap();
        let store = FileStore::new(&dir);

        let err =
            Leaderboard::create_persisted_object(&store, DEFAULT_LEADERBOARD_FILE, MAX_HIGH_SCORES)
                .unwrap_err();
        assert!(err.is_corrupt());
        assert!(err.to_string().contains(DEFAULT_LEADERBOARD_FILE));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_target_surfaces_error() {
        let dir = scratch_dir("unwritable");
        fs::create_dir_all(&dir).unwrap();
        // A plain file where the store directory should be
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "x").unwrap();
        let mut store = FileStore::new(&blocker);

        let err = sample_board()
            .store(&mut store, DEFAULT_LEADERBOARD_FILE)
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));

        let _ = fs::remove_dir_all(&dir);
    }
}
