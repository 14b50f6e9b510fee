//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use fala_core::FeedbackBand;
use fala_core::feedback::BandColor;
use owo_colors::{OwoColorize, Stream, Style};

pub mod batch;
pub mod classify;
pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Band label colored by its presentation hint, honoring `--color`.
pub fn colored_band(band: FeedbackBand) -> String {
    let style = match band.color() {
        BandColor::Green => Style::new().green(),
        BandColor::Blue => Style::new().blue(),
        BandColor::Yellow => Style::new().yellow(),
        BandColor::Red => Style::new().red(),
    };
    band.as_str()
        .if_supports_color(Stream::Stdout, |label| label.style(style))
        .to_string()
}
