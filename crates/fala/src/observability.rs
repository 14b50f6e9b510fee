//! Logging setup.
//!
//! Human-readable events go to stderr (stdout is reserved for command output
//! and the MCP transport). When a log location is configured, events are also
//! written as JSON Lines through a non-blocking `tracing-appender` writer.
//!
//! Log file resolution, first match wins:
//! 1. `FALA_LOG_PATH` (exact file)
//! 2. `FALA_LOG_DIR/fala.jsonl`
//! 3. `log_dir` from config + `/fala.jsonl`

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "fala";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where to write the JSONL log, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Full path of the log file.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve from `FALA_LOG_PATH` / `FALA_LOG_DIR`, falling back to the
    /// configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os("FALA_LOG_PATH").map(PathBuf::from),
            std::env::var_os("FALA_LOG_DIR").map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = env_path.or_else(|| {
            env_dir
                .or(config_dir)
                .map(|dir| dir.join(format!("{LOG_FILE_PREFIX}.{LOG_FILE_SUFFIX}")))
        });
        Self { log_file }
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects `error`, `-v` selects
/// `debug`, `-vv` and up select `trace`, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
///
/// `ansi` controls escape codes on the stderr layer; the file layer never
/// has them. Keep the returned guard alive for the life of the process;
/// dropping it flushes the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    ansi: bool,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(ansi).with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn open_log_file(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid log file path: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
