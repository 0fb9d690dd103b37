//! Logging and tracing setup for the CLI.
//!
//! Human-readable log lines always go to stderr so stdout stays clean for
//! command output and the MCP stdio transport. When a log file or directory
//! is configured, a second layer writes JSONL through a non-blocking
//! `tracing-appender` writer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
const ENV_LOG_PATH: &str = "RESUME_LINT_LOG_PATH";
/// Directory for the default log file.
const ENV_LOG_DIR: &str = "RESUME_LINT_LOG_DIR";
/// File name used inside a log directory.
const LOG_FILE_NAME: &str = "resume-lint.jsonl";

/// Where (if anywhere) JSONL logs are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Full path of the JSONL log file, or `None` for stderr only.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured log directory.
    ///
    /// Precedence: `RESUME_LINT_LOG_PATH`, then `RESUME_LINT_LOG_DIR`, then
    /// `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH).filter(|v| !v.is_empty());
        let log_dir = std::env::var_os(ENV_LOG_DIR).filter(|v| !v.is_empty());
        Self::resolve(
            log_path.map(PathBuf::from),
            log_dir.map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path.or_else(|| {
            log_dir
                .or(config_log_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        });
        Self { log_file }
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `-q` and `-v` win over everything; otherwise `RUST_LOG` is honored and
/// the configured level is the fallback.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let flag_level = if quiet {
        Some("error")
    } else {
        match verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    };

    match flag_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file logs are
/// flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
