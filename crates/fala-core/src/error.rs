//! Error types for fala-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which side of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSide {
    /// The recognized utterance.
    Utterance,
    /// The expected target word or phrase.
    Target,
}

impl InputSide {
    /// Returns the side as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utterance => "utterance",
            Self::Target => "target",
        }
    }
}

impl std::fmt::Display for InputSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by a length-capped [`Scorer`](crate::scorer::Scorer).
///
/// The free functions [`score`](crate::score::score) and
/// [`evaluate`](crate::scorer::evaluate) never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// One of the inputs exceeds the configured character limit.
    #[error("{which} too long: {len} characters (limit: {limit})")]
    InputTooLong {
        /// Which input was rejected.
        which: InputSide,
        /// Length of the normalized input in characters.
        len: usize,
        /// Configured limit in characters.
        limit: usize,
    },

    /// A numeric score fell outside 0--100.
    #[error("score out of range: {0} (expected 0-100)")]
    OutOfRange(i64),
}

/// Result type alias using [`ScoreError`].
pub type ScoreResult<T> = Result<T, ScoreError>;

/// Errors that can occur while scoring a batch of attempts.
#[derive(Error, Debug)]
pub enum BatchError {
    /// A line could not be parsed as an attempt record.
    #[error("line {line}: malformed record: {message}")]
    MalformedRecord {
        /// 1-based line number in the input.
        line: usize,
        /// Parser error message.
        message: String,
    },

    /// An attempt was rejected by the scorer.
    #[error("line {line}: {source}")]
    Score {
        /// 1-based line number in the input.
        line: usize,
        /// Underlying scorer error.
        #[source]
        source: ScoreError,
    },
}

/// Result type alias using [`BatchError`].
pub type BatchResult<T> = Result<T, BatchError>;
