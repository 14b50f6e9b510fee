//! Combined scoring and classification.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{InputSide, ScoreError, ScoreResult};
use crate::feedback::FeedbackBand;
use crate::normalize::Normalized;
use crate::score::{Score, score_normalized};

/// Default per-string limit applied by the CLI and MCP server.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1024;

/// Result of comparing an utterance against a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Evaluation {
    /// Similarity, 0--100.
    pub score: Score,
    /// Band derived from the score.
    pub band: FeedbackBand,
    /// Message for the band.
    pub message: String,
    /// Edit distance between the normalized inputs.
    pub distance: usize,
    /// Length of the longer normalized input, in characters.
    pub max_len: usize,
}

/// Score and classify in one call.
pub fn evaluate(utterance: &str, target: &str) -> Evaluation {
    evaluate_normalized(&Normalized::new(utterance), &Normalized::new(target))
}

fn evaluate_normalized(utterance: &Normalized, target: &Normalized) -> Evaluation {
    let (score, distance, max_len) = score_normalized(utterance, target);
    let band = FeedbackBand::from_score(score);
    Evaluation {
        score,
        band,
        message: band.message().to_string(),
        distance,
        max_len,
    }
}

/// Scorer with an optional cap on input length.
///
/// The DP table is `O(n·m)`; the cap bounds it for untrusted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    max_chars: Option<usize>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_INPUT_CHARS))
    }
}

impl Scorer {
    /// Create a scorer that rejects normalized inputs longer than `max_chars`.
    pub const fn new(max_chars: Option<usize>) -> Self {
        Self { max_chars }
    }

    /// Create a scorer with no length limit.
    pub const fn unbounded() -> Self {
        Self { max_chars: None }
    }

    /// The configured limit, if any.
    pub const fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    /// Evaluate, rejecting inputs over the limit.
    #[tracing::instrument(
        skip_all,
        fields(
            utterance_chars = utterance.chars().count(),
            target_chars = target.chars().count()
        )
    )]
    pub fn try_evaluate(&self, utterance: &str, target: &str) -> ScoreResult<Evaluation> {
        let utterance = Normalized::new(utterance);
        let target = Normalized::new(target);
        self.check(InputSide::Utterance, &utterance)?;
        self.check(InputSide::Target, &target)?;

        let evaluation = evaluate_normalized(&utterance, &target);
        tracing::debug!(
            score = evaluation.score.value(),
            band = evaluation.band.as_str(),
            distance = evaluation.distance,
            "evaluated attempt"
        );
        Ok(evaluation)
    }

    /// Score only, rejecting inputs over the limit.
    pub fn try_score(&self, utterance: &str, target: &str) -> ScoreResult<Score> {
        self.try_evaluate(utterance, target).map(|e| e.score)
    }

    fn check(&self, which: InputSide, input: &Normalized) -> ScoreResult<()> {
        match self.max_chars {
            Some(limit) if input.len() > limit => Err(ScoreError::InputTooLong {
                which,
                len: input.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}
