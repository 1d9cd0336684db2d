//! Versioned JSON envelope for stored leaderboards

use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::highscores::Leaderboard;
use crate::score::Score;

/// Current envelope format version
pub const ENVELOPE_VERSION: u32 = 1;

/// Why stored leaderboard data was rejected
#[derive(Debug, thiserror::Error)]
pub enum CorruptReason {
    #[error("could not decode: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("unsupported envelope version {0}")]
    UnsupportedVersion(u32),
    #[error("capacity is zero")]
    ZeroCapacity,
    #[error("{len} entries exceed capacity {capacity}")]
    OverCapacity { len: usize, capacity: usize },
    #[error("entry {index} is out of ascending score order")]
    Unsorted { index: usize },
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    capacity: usize,
    entries: &'a [Score],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    capacity: usize,
    entries: Vec<Score>,
}

/// Encode a leaderboard into its stored form
pub fn encode(leaderboard: &Leaderboard) -> Result<String, StoreError> {
    let envelope = EnvelopeRef {
        version: ENVELOPE_VERSION,
        capacity: leaderboard.capacity(),
        entries: leaderboard.entries(),
    };
    serde_json::to_string_pretty(&envelope).map_err(StoreError::Encode)
}

/// Decode and validate a stored leaderboard
pub fn decode(identifier: &str, data: &str) -> Result<Leaderboard, StoreError> {
    let envelope: Envelope = serde_json::from_str(data)
        .map_err(|e| StoreError::corrupt(identifier, CorruptReason::Decode(e)))?;
    validate(&envelope).map_err(|reason| StoreError::corrupt(identifier, reason))?;
    Ok(Leaderboard::from_parts(envelope.capacity, envelope.entries))
}

fn validate(envelope: &Envelope) -> Result<(), CorruptReason> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(CorruptReason::UnsupportedVersion(envelope.version));
    }
    if envelope.capacity == 0 {
        return Err(CorruptReason::ZeroCapacity);
    }
    if envelope.entries.len() > envelope.capacity {
        return Err(CorruptReason::OverCapacity {
            len: envelope.entries.len(),
            capacity: envelope.capacity,
        });
    }
    if let Some(i) = envelope
        .entries
        .windows(2)
        .position(|w| w[0].score() > w[1].score())
    {
        return Err(CorruptReason::Unsorted { index: i + 1 });
    }
    Ok(())
}
