//! Feedback bands.
//!
//! | Score     | Band        | Message                          |
//! |-----------|-------------|----------------------------------|
//! | 90--100   | `excellent` | Perfect pronunciation!           |
//! | 75--89    | `good`      | Great job!                       |
//! | 60--74    | `fair`      | Good attempt. Keep practicing!   |
//! | 0--59     | `poor`      | Needs improvement. Try again!    |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::score::Score;

/// Lowest score in the `excellent` band.
pub const EXCELLENT_MIN: u8 = 90;
/// Lowest score in the `good` band.
pub const GOOD_MIN: u8 = 75;
/// Lowest score in the `fair` band.
pub const FAIR_MIN: u8 = 60;

/// Qualitative label derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackBand {
    /// 90 and above.
    Excellent,
    /// 75 to 89.
    Good,
    /// 60 to 74.
    Fair,
    /// Below 60.
    Poor,
}

/// Presentation hint for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    /// Success.
    Green,
    /// Positive, not perfect.
    Blue,
    /// Caution.
    Yellow,
    /// Retry.
    Red,
}

impl FeedbackBand {
    /// All bands, best first.
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    /// Band for a score.
    pub const fn from_score(score: Score) -> Self {
        match score.value() {
            s if s >= EXCELLENT_MIN => Self::Excellent,
            s if s >= GOOD_MIN => Self::Good,
            s if s >= FAIR_MIN => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Returns the band label as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Message shown to the learner.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Perfect pronunciation!",
            Self::Good => "Great job!",
            Self::Fair => "Good attempt. Keep practicing!",
            Self::Poor => "Needs improvement. Try again!",
        }
    }

    /// Colour hint for rendering.
    pub const fn color(&self) -> BandColor {
        match self {
            Self::Excellent => BandColor::Green,
            Self::Good => BandColor::Blue,
            Self::Fair => BandColor::Yellow,
            Self::Poor => BandColor::Red,
        }
    }

    /// Lowest score that falls in this band.
    pub const fn min_score(&self) -> u8 {
        match self {
            Self::Excellent => EXCELLENT_MIN,
            Self::Good => GOOD_MIN,
            Self::Fair => FAIR_MIN,
            Self::Poor => 0,
        }
    }
}

impl std::fmt::Display for FeedbackBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a score into its feedback band.
pub const fn classify(score: Score) -> FeedbackBand {
    FeedbackBand::from_score(score)
}
