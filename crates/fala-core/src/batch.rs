//! Batch scoring of recorded attempts.
//!
//! Input is JSON Lines, one attempt per line:
//!
//! ```text
//! {"id": "w1", "utterance": "helo", "target": "hello"}
//! {"utterance": "obrigado", "target": "Obrigado"}
//! # comments and blank lines are skipped
//! ```
//!
//! A missing or `null` utterance or target is scored as the empty string.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{BatchError, BatchResult};
use crate::feedback::FeedbackBand;
use crate::score::Score;
use crate::scorer::{Evaluation, Scorer};

/// One attempt as read from input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct AttemptRecord {
    /// Caller-supplied identifier, echoed back in the report.
    pub id: Option<String>,
    /// What the recognizer heard.
    pub utterance: Option<String>,
    /// What the learner was asked to say.
    pub target: Option<String>,
}

impl AttemptRecord {
    /// Create a record from an utterance and target.
    pub fn new(utterance: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: None,
            utterance: Some(utterance.into()),
            target: Some(target.into()),
        }
    }

    /// The utterance, or `""` when absent.
    pub fn utterance(&self) -> &str {
        self.utterance.as_deref().unwrap_or_default()
    }

    /// The target, or `""` when absent.
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or_default()
    }
}

/// A parsed record and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// 1-based line number (or position, for in-memory records).
    pub line: usize,
    /// The parsed record.
    pub record: AttemptRecord,
}

/// Scored attempt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AttemptReport {
    /// 1-based line number (or position) of the attempt.
    pub line: usize,
    /// Caller-supplied identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Utterance as given.
    pub utterance: String,
    /// Target as given.
    pub target: String,
    /// Score and feedback.
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// Number of attempts in each band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BandCounts {
    /// Attempts scoring 90 or above.
    pub excellent: usize,
    /// Attempts scoring 75--89.
    pub good: usize,
    /// Attempts scoring 60--74.
    pub fair: usize,
    /// Attempts scoring below 60.
    pub poor: usize,
}

impl BandCounts {
    fn record(&mut self, band: FeedbackBand) {
        match band {
            FeedbackBand::Excellent => self.excellent += 1,
            FeedbackBand::Good => self.good += 1,
            FeedbackBand::Fair => self.fair += 1,
            FeedbackBand::Poor => self.poor += 1,
        }
    }

    /// Count for a single band.
    pub const fn get(&self, band: FeedbackBand) -> usize {
        match band {
            FeedbackBand::Excellent => self.excellent,
            FeedbackBand::Good => self.good,
            FeedbackBand::Fair => self.fair,
            FeedbackBand::Poor => self.poor,
        }
    }
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchSummary {
    /// Number of attempts scored.
    pub count: usize,
    /// Mean score (0.0 for an empty batch).
    pub mean_score: f64,
    /// Pass gate, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<Score>,
    /// Attempts scoring strictly below the gate.
    pub below_min: usize,
    /// Attempts per band.
    pub bands: BandCounts,
    /// Whether every attempt met the gate.
    pub pass: bool,
}

/// Result of scoring a batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchReport {
    /// Per-attempt results, in input order.
    pub attempts: Vec<AttemptReport>,
    /// Aggregate statistics.
    pub summary: BatchSummary,
}

/// Parse JSON Lines into attempts.
///
/// Each non-blank, non-comment line must be a JSON object.
pub fn parse_attempts(input: &str) -> BatchResult<Vec<Attempt>> {
    let mut attempts = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let value: serde_json::Value =
            serde_json::from_str(trimmed).map_err(|e| BatchError::MalformedRecord {
                line,
                message: e.to_string(),
            })?;
        if !value.is_object() {
            return Err(BatchError::MalformedRecord {
                line,
                message: "expected a JSON object".to_string(),
            });
        }
        let record: AttemptRecord =
            serde_json::from_value(value).map_err(|e| BatchError::MalformedRecord {
                line,
                message: e.to_string(),
            })?;
        attempts.push(Attempt { line, record });
    }
    Ok(attempts)
}

/// Number in-memory records by position, starting at 1.
pub fn number_records(records: Vec<AttemptRecord>) -> Vec<Attempt> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| Attempt {
            line: idx + 1,
            record,
        })
        .collect()
}

/// Score parsed attempts and summarize.
#[tracing::instrument(skip_all, fields(count = attempts.len(), min_score = ?min_score))]
pub fn score_attempts(
    attempts: &[Attempt],
    scorer: &Scorer,
    min_score: Option<Score>,
) -> BatchResult<BatchReport> {
    let mut reports = Vec::with_capacity(attempts.len());
    let mut bands = BandCounts::default();
    let mut total: u64 = 0;
    let mut below_min = 0;

    for attempt in attempts {
        let record = &attempt.record;
        let evaluation = scorer
            .try_evaluate(record.utterance(), record.target())
            .map_err(|source| BatchError::Score {
                line: attempt.line,
                source,
            })?;

        bands.record(evaluation.band);
        total += u64::from(evaluation.score.value());
        if min_score.is_some_and(|min| evaluation.score < min) {
            below_min += 1;
        }

        reports.push(AttemptReport {
            line: attempt.line,
            id: record.id.clone(),
            utterance: record.utterance().to_string(),
            target: record.target().to_string(),
            evaluation,
        });
    }

    let count = reports.len();
    let mean_score = if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    };

    tracing::debug!(count, mean_score, below_min, "batch scored");

    Ok(BatchReport {
        attempts: reports,
        summary: BatchSummary {
            count,
            mean_score,
            min_score,
            below_min,
            bands,
            pass: below_min == 0,
        },
    })
}

/// Parse and score a JSON Lines document.
pub fn score_batch(
    input: &str,
    scorer: &Scorer,
    min_score: Option<Score>,
) -> BatchResult<BatchReport> {
    let attempts = parse_attempts(input)?;
    score_attempts(&attempts, scorer, min_score)
}
