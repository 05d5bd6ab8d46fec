use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

const LOG_FILE_NAME: &str = "arcspin.log";
const DEFAULT_DIRECTIVE: &str = "arcspin=info";

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("arcspin")
        .join("logs")
}

/// Where the rolling appender writes. Files are named `<prefix>.YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub dir: PathBuf,
    pub prefix: String,
}

impl LogTarget {
    /// Path pattern of the files the appender writes, one per day.
    pub fn pattern(&self) -> String {
        format!("{}.YYYY-MM-DD", self.dir.join(&self.prefix).display())
    }

    fn appender(&self) -> RollingFileAppender {
        RollingFileAppender::new(Rotation::DAILY, &self.dir, &self.prefix)
    }
}

/// Split the configured log path into directory and file-name prefix.
fn log_location(config: &Config) -> LogTarget {
    let (dir, prefix) = match &config.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (dir.to_path_buf(), file_name.to_string())
        }
        None => (default_log_dir(), LOG_FILE_NAME.to_string()),
    };
    LogTarget { dir, prefix }
}

/// Sets up file logging.
///
/// The terminal belongs to the TUI, so events only go to a daily rolling
/// file. `RUST_LOG` overrides the default `arcspin=info` filter. The returned
/// guard must stay alive until exit so buffered lines get flushed.
pub fn setup_logging(config: &Config) -> Result<(LogTarget, WorkerGuard)> {
    let target = log_location(config);

    fs::create_dir_all(&target.dir)
        .with_context(|| format!("Failed to create log directory: {}", target.dir.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(target.appender());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(filter),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok((target, guard))
}
