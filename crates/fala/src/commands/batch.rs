//! Batch command: score a JSON Lines file of attempts.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use fala_core::{FeedbackBand, Score, Scorer, batch};
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use super::{colored_band, read_input_file};

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON Lines file with `utterance` and `target` fields.
    pub file: Utf8PathBuf,

    /// Fail when any attempt scores below this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Score every attempt in a file and print a summary.
#[instrument(name = "cmd_batch", skip_all, fields(file = %args.file))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    scorer: Scorer,
    config_min_score: Option<Score>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing batch command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let min_score = args.min_score.map(Score::saturating).or(config_min_score);

    let report = batch::score_batch(&content, &scorer, min_score)
        .with_context(|| format!("failed to score {}", args.file))?;
    let summary = &report.summary;
    debug!(
        count = summary.count,
        mean_score = summary.mean_score,
        below_min = summary.below_min,
        "batch complete"
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for attempt in &report.attempts {
            let label = attempt
                .id
                .clone()
                .unwrap_or_else(|| format!("line {}", attempt.line));
            println!(
                "{label:>10}  {:>3}  {:<9}  {:?} -> {:?}",
                attempt.evaluation.score,
                colored_band(attempt.evaluation.band),
                attempt.utterance,
                attempt.target,
            );
        }
        let bands = FeedbackBand::ALL
            .iter()
            .map(|band| format!("{band}: {}", summary.bands.get(*band)))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} attempts, mean {:.1} ({bands})",
            summary.count.if_supports_color(Stream::Stdout, |c| c.bold()),
            summary.mean_score,
        );
    }

    if !summary.pass {
        let min = summary.min_score.unwrap_or(Score::MIN);
        bail!(
            "{} of {} attempts in {} scored below {}",
            summary.below_min,
            summary.count,
            args.file,
            min
        );
    }

    Ok(())
}
