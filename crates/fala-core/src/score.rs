//! Similarity scoring.
//!
//! `similarity = (1 - distance / max_len) * 100`, clamped to 0--100 and
//! rounded half up. Rounding is done in integer arithmetic so exact halves
//! such as 57.5 always round up. Two inputs that are empty after
//! normalization score 100.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::distance::levenshtein;
use crate::error::{ScoreError, ScoreResult};
use crate::normalize::Normalized;

/// A similarity score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);
    /// Highest possible score; an exact match.
    pub const MAX: Self = Self(100);

    /// Create a score, returning `None` above 100.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 { Some(Self(value)) } else { None }
    }

    /// Create a score, clamping anything above 100.
    pub const fn saturating(value: u8) -> Self {
        if value > 100 { Self::MAX } else { Self(value) }
    }

    /// The score as an integer.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Score from an edit distance and the longer normalized length.
    pub fn from_distance(distance: usize, max_len: usize) -> Self {
        if max_len == 0 {
            return Self::MAX;
        }
        let kept = max_len.saturating_sub(distance) as u128;
        // Twice the percentage, so the half-up step stays integral.
        let doubled = kept * 200 / max_len as u128;
        u8::try_from((doubled + 1) / 2).map_or(Self::MAX, Self::saturating)
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> ScoreResult<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(ScoreError::OutOfRange(value))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score how closely `utterance` matches `target`.
///
/// Total over all inputs: empty, whitespace-only, very long, or
/// control-character strings all produce a valid score.
pub fn score(utterance: &str, target: &str) -> Score {
    score_normalized(&Normalized::new(utterance), &Normalized::new(target)).0
}

/// Score two already-normalized inputs, also returning the edit distance
/// and the longer length.
pub(crate) fn score_normalized(a: &Normalized, b: &Normalized) -> (Score, usize, usize) {
    let max_len = a.len().max(b.len());
    if a == b {
        return (Score::MAX, 0, max_len);
    }
    let distance = levenshtein(a.chars(), b.chars());
    (Score::from_distance(distance, max_len), distance, max_len)
}
