//! Classify command: map a score to its feedback band.

use clap::Args;
use fala_core::{Score, classify};
use serde::Serialize;
use tracing::{debug, instrument};

use super::colored_band;

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Score to classify (0-100).
    #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
    pub score: u8,
}

#[derive(Serialize)]
struct Classification {
    score: Score,
    band: fala_core::FeedbackBand,
    message: &'static str,
    color: fala_core::BandColor,
}

/// Print the band for a score.
#[instrument(name = "cmd_classify", skip_all, fields(score = args.score))]
pub fn cmd_classify(args: ClassifyArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(score = args.score, "executing classify command");

    let score = Score::saturating(args.score);
    let band = classify(score);

    if global_json {
        let out = Classification {
            score,
            band,
            message: band.message(),
            color: band.color(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} {}", colored_band(band), band.message());
    }

    Ok(())
}
