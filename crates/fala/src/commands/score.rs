//! Score command: compare one utterance with one target.

use anyhow::{Context, bail};
use clap::Args;
use fala_core::{Score, Scorer};
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use super::colored_band;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// What the recognizer heard.
    pub utterance: String,

    /// What the learner was asked to say.
    pub target: String,

    /// Fail when the score is below this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Score an utterance and print the feedback band.
#[instrument(name = "cmd_score", skip_all)]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    scorer: Scorer,
    config_min_score: Option<Score>,
) -> anyhow::Result<()> {
    debug!(
        utterance_chars = args.utterance.chars().count(),
        target_chars = args.target.chars().count(),
        min_score = ?args.min_score,
        "executing score command"
    );

    let evaluation = scorer
        .try_evaluate(&args.utterance, &args.target)
        .context("failed to score attempt")?;
    let min_score = args.min_score.map(Score::saturating).or(config_min_score);
    let below_min = min_score.is_some_and(|min| evaluation.score < min);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!(
            "{} {} {}",
            evaluation.score.if_supports_color(Stream::Stdout, |s| s.bold()),
            colored_band(evaluation.band),
            evaluation.message,
        );
    }

    if below_min {
        let min = min_score.unwrap_or(Score::MIN);
        bail!(
            "score {} is below the minimum of {}. Try again.",
            evaluation.score,
            min
        );
    }

    Ok(())
}
