//! Core library for fala.
//!
//! Scores a recognized utterance against the word or phrase a learner was
//! asked to say, and maps the score to a feedback band.
//!
//! # Modules
//!
//! - [`normalize`] - Trimming and case folding
//! - [`distance`] - Levenshtein edit distance
//! - [`score`] - The bounded [`Score`] and [`score()`]
//! - [`feedback`] - [`FeedbackBand`] and [`classify()`]
//! - [`scorer`] - [`evaluate()`] and the length-capped [`Scorer`]
//! - [`batch`] - Scoring JSON Lines files of attempts
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use fala_core::{FeedbackBand, evaluate, score};
//!
//! assert_eq!(score("helo", "hello").value(), 80);
//!
//! let result = evaluate("Colour ", "color");
//! assert_eq!(result.band, FeedbackBand::Good);
//! assert_eq!(result.message, "Great job!");
//! ```
#![deny(unsafe_code)]

pub mod batch;
pub mod config;
pub mod distance;
pub mod error;
pub mod feedback;
pub mod normalize;
pub mod score;
pub mod scorer;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use distance::edit_distance;
pub use error::{BatchError, ConfigError, ConfigResult, InputSide, ScoreError, ScoreResult};
pub use feedback::{BandColor, FeedbackBand, classify};
pub use score::{Score, score};
pub use scorer::{DEFAULT_MAX_INPUT_CHARS, Evaluation, Scorer, evaluate};
