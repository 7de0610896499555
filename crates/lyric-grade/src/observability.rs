//! Logging setup: a human-readable stderr layer plus an optional JSON-lines
//! log file.
//!
//! Stdout is left alone so `--json` output and the MCP stdio transport stay
//! clean.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "LYRIC_GRADE_LOG_PATH";
const LOG_DIR_ENV: &str = "LYRIC_GRADE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "lyric-grade.log";

/// Where the JSON log file goes, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// One file at an exact path, never rotated.
    File(PathBuf),
    /// Daily-rotated files in a directory.
    Directory(PathBuf),
}

/// Resolved logging configuration.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// File log target; `None` logs to stderr only.
    pub target: Option<LogTarget>,
}

impl ObservabilityConfig {
    /// Resolve the log target from the environment, falling back to the
    /// configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            target: resolve_target(
                std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
                std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
                config_log_dir,
            ),
        }
    }
}

/// `LYRIC_GRADE_LOG_PATH` beats `LYRIC_GRADE_LOG_DIR` beats config.
fn resolve_target(
    log_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    config_log_dir: Option<PathBuf>,
) -> Option<LogTarget> {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
    if let Some(path) = log_path.filter(non_empty) {
        return Some(LogTarget::File(path));
    }
    log_dir
        .filter(non_empty)
        .or(config_log_dir)
        .map(LogTarget::Directory)
}

/// Build the filter: `RUST_LOG` wins, then `-q`/`-v`, then the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, default_level))
}

fn level_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.target {
        Some(ref target) => {
            let appender = appender_for(target)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer);
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

fn appender_for(target: &LogTarget) -> anyhow::Result<tracing_appender::rolling::RollingFileAppender> {
    match target {
        LogTarget::File(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            create_dir(dir)?;
            Ok(tracing_appender::rolling::never(dir, file_name))
        }
        LogTarget::Directory(dir) => {
            create_dir(dir)?;
            Ok(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
        }
    }
}

fn create_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let target = resolve_target(
            Some(PathBuf::from("/tmp/a.log")),
            Some(PathBuf::from("/tmp/dir")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(target, Some(LogTarget::File(PathBuf::from("/tmp/a.log"))));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let target = resolve_target(
            None,
            Some(PathBuf::from("/tmp/dir")),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(target, Some(LogTarget::Directory(PathBuf::from("/tmp/dir"))));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let target = resolve_target(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/tmp/config")),
        );
        assert_eq!(
            target,
            Some(LogTarget::Directory(PathBuf::from("/tmp/config")))
        );
        assert_eq!(resolve_target(None, None, None), None);
    }

    #[test]
    fn flags_override_configured_level() {
        assert_eq!(level_directive(true, 3, "info"), "error");
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "warn"), "debug");
        assert_eq!(level_directive(false, 2, "warn"), "trace");
    }
}
