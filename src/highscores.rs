//! High score leaderboard
//!
//! Keeps the best `capacity` scores sorted ascending, so the entry at index 0 is
//! always the next one to be evicted. Persistence goes through a
//! [`LeaderboardStore`] injected by the caller.

use std::fmt;

use crate::persistence::{LeaderboardStore, StoreError};
use crate::score::Score;

/// Default number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Outcome of a finished game run, as handed over by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Final score
    pub score: u64,
    /// Level reached when the run ended
    pub level: u32,
}

/// What [`Leaderboard::add_score`] did to make room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Board had free slots; nothing was removed
    Appended,
    /// Board was full; the previous minimum was dropped
    Evicted(Score),
}

/// A row of the leaderboard as presented to the player (best first)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    /// 1-indexed position, 1 being the best
    pub rank: usize,
    pub initials: &'a str,
    pub score: u64,
    pub level: u32,
}

impl fmt::Display for RankedEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>8}   (level: {:>2})",
            self.initials, self.score, self.level
        )
    }
}

/// Bounded high score leaderboard, sorted ascending by score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    capacity: usize,
    entries: Vec<Score>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    /// Create empty leaderboard with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_HIGH_SCORES)
    }

    /// Create empty leaderboard holding at most `capacity` entries (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Rebuild from already validated parts (sorted, within capacity)
    pub(crate) fn from_parts(capacity: usize, entries: Vec<Score>) -> Self {
        debug_assert!(capacity > 0 && entries.len() <= capacity);
        Self { capacity, entries }
    }

    /// Check if a score would earn a slot on the leaderboard
    ///
    /// Any score qualifies while there is room. Once full, the candidate has to
    /// beat the current minimum; tying it is not enough.
    pub fn is_high_score(&self, candidate: impl Into<i128>) -> bool {
        if !self.is_full() {
            return true;
        }
        let candidate = candidate.into();
        self.min_score()
            .map(|min| candidate > i128::from(min))
            .unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    ///
    /// Ties follow where [`Leaderboard::add_score`] puts the newcomer: below
    /// equal scores while there is room (appended), above them once full
    /// (written into the lowest slot before the stable re-sort).
    pub fn potential_rank(&self, candidate: impl Into<i128>) -> Option<usize> {
        let candidate = candidate.into();
        if !self.is_high_score(candidate) {
            return None;
        }
        let full = self.is_full();
        let ahead = self
            .entries
            .iter()
            .map(|e| i128::from(e.score()))
            .filter(|&score| score > candidate || (!full && score == candidate))
            .count();
        Some(ahead + 1)
    }

    /// Admit a finished run into the leaderboard
    ///
    /// The caller must have checked [`Leaderboard::is_high_score`] for this run
    /// first. When the board is full the lowest entry is replaced without
    /// comparing, so calling this out of contract drops a better score.
    ///
    /// `initials` is taken and left empty, which tells the input layer that
    /// initials entry is finished.
    pub fn add_score(&mut self, run: RunResult, initials: &mut String) -> Admission {
        let entry = Score::new(run.score, run.level, std::mem::take(initials));

        let admission = if self.entries.len() < self.capacity {
            self.entries.push(entry);
            Admission::Appended
        } else {
            let evicted = std::mem::replace(&mut self.entries[0], entry);
            log::debug!(
                "Evicted {} ({}) from the leaderboard",
                evicted.initials(),
                evicted.score()
            );
            Admission::Evicted(evicted)
        };

        // Stable: equal scores keep their relative order
        self.entries.sort_by(Score::cmp_score);

        log::debug!(
            "Admitted score {} (level {}), {} of {} slots used",
            run.score,
            run.level,
            self.entries.len(),
            self.capacity
        );
        admission
    }

    /// Entries in ascending score order
    pub fn entries(&self) -> &[Score] {
        &self.entries
    }

    /// Entries best first, numbered for display
    pub fn ranked(&self) -> Vec<RankedEntry<'_>> {
        let mut sorted: Vec<&Score> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.cmp_score(a));
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, s)| RankedEntry {
                rank: i + 1,
                initials: s.initials(),
                score: s.score(),
                level: s.level(),
            })
            .collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Lowest stored score (the next eviction candidate when full)
    pub fn min_score(&self) -> Option<u64> {
        self.entries.first().map(Score::score)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.last().map(Score::score)
    }

    /// Load a previously stored leaderboard, `None` if nothing was stored yet
    pub fn load<S>(store: &S, identifier: &str) -> Result<Option<Self>, StoreError>
    where
        S: LeaderboardStore + ?Sized,
    {
        store.load(identifier)
    }

    /// Persist this leaderboard under `identifier`
    pub fn store<S>(&self, store: &mut S, identifier: &str) -> Result<(), StoreError>
    where
        S: LeaderboardStore + ?Sized,
    {
        store.store(self, identifier)
    }

    /// Load the stored leaderboard, or start an empty one on first run
    ///
    /// Only missing state falls back to an empty board. Unreadable or corrupt
    /// state is returned as an error so the caller can decide what to do.
    pub fn create_persisted_object<S>(
        store: &S,
        identifier: &str,
        capacity: usize,
    ) -> Result<Self, StoreError>
    where
        S: LeaderboardStore + ?Sized,
    {
        match Self::load(store, identifier)? {
            Some(board) => Ok(board),
            None => {
                log::info!("No high scores found, starting fresh");
                Ok(Self::with_capacity(capacity))
            }
        }
    }
}
