//! Single leaderboard entry

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One ranked result: final score, level reached and the player's initials.
///
/// Ranking uses the score alone (see [`Score::cmp_score`]); level and initials
/// are payload. Equality compares all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    score: u64,
    level: u32,
    initials: String,
}

impl Score {
    pub fn new(score: u64, level: u32, initials: impl Into<String>) -> Self {
        Self {
            score,
            level,
            initials: initials.into(),
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn initials(&self) -> &str {
        &self.initials
    }

    /// Compare by score value only
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_ignores_payload() {
        let a = Score::new(100, 1, "aaa");
        let b = Score::new(100, 7, "zzz");
        assert_eq!(a.cmp_score(&b), Ordering::Equal);
        assert_ne!(a, b);

        let low = Score::new(50, 9, "zzz");
        assert_eq!(low.cmp_score(&a), Ordering::Less);
        assert_eq!(a.cmp_score(&low), Ordering::Greater);
    }

    #[test]
    fn test_equality_needs_all_fields() {
        assert_eq!(Score::new(400, 2, "xyz"), Score::new(400, 2, "xyz"));
        assert_ne!(Score::new(400, 2, "xyz"), Score::new(400, 3, "xyz"));
        assert_ne!(Score::new(400, 2, "xyz"), Score::new(400, 2, "abc"));
    }
}
