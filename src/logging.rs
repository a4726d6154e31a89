//! Tracing initialization.
//! Builds a subscriber with EnvFilter, supports compact or JSON formats, and optional file logging.
//!
//! Behavior:
//! - Log level is driven by `Config::log_level` (no RUST_LOG override here).
//! - Console output goes to stderr so it never mixes with a host program's stdout.
//! - If `Config::log_file` is set, a non-blocking file layer is added; a log
//!   path with a symlinked ancestor is refused.
//! - Installing twice is an error, not a panic (`try_init`).

use anyhow::{Context, Result, bail};
use chrono::Local;
use std::fmt as stdfmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogLevel, path_has_symlink_ancestor};

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
pub fn to_level_filter(lvl: LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

/// EnvFilter equivalent of `lvl`.
pub fn env_filter(lvl: LogLevel) -> EnvFilter {
    EnvFilter::new(to_level_filter(lvl).to_string())
}

/// Append-only, owner-only log file; never follows a symlink at the leaf.
fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600).custom_flags(libc::O_NOFOLLOW);
    }
    opts.open(path)
}

/// Install the global subscriber described by `cfg`.
///
/// Returns the file appender's guard when file logging is enabled; hold it
/// until shutdown so buffered lines are flushed.
pub fn init_tracing(cfg: &Config) -> Result<Option<WorkerGuard>> {
    let (file_writer, guard) = match cfg.log_file.as_deref() {
        Some(path) => {
            if path_has_symlink_ancestor(path)
                .with_context(|| format!("check log path '{}' for symlinks", path.display()))?
            {
                bail!("refusing to log to '{}': an ancestor is a symlink", path.display());
            }
            let file = open_log_file_secure_append(path)
                .with_context(|| format!("open log file '{}'", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    // Exactly one of each pair is Some; Option<Layer> is a no-op layer when None.
    let (json_console, compact_console) = if cfg.json_logs {
        let layer = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(io::stderr);
        (Some(layer), None)
    } else {
        let layer = tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_thread_ids(true)
            .compact()
            .with_writer(io::stderr);
        (None, Some(layer))
    };
    let (json_file, compact_file) = match file_writer {
        Some(writer) if cfg.json_logs => (
            Some(
                tsfmt::layer()
                    .event_format(tsfmt::format().json())
                    .with_timer(LocalHumanTime)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(false)
                    .with_writer(writer),
            ),
            None,
        ),
        Some(writer) => (
            None,
            Some(
                tsfmt::layer()
                    .with_timer(LocalHumanTime)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(false)
                    .compact()
                    .with_writer(writer),
            ),
        ),
        None => (None, None),
    };

    registry()
        .with(env_filter(cfg.log_level))
        .with(json_console)
        .with(compact_console)
        .with(json_file)
        .with(compact_file)
        .try_init()
        .context("install tracing subscriber")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_mapping_is_monotonic() {
        assert_eq!(to_level_filter(LogLevel::Quiet), LevelFilter::ERROR);
        assert_eq!(to_level_filter(LogLevel::Normal), LevelFilter::INFO);
        assert_eq!(to_level_filter(LogLevel::Info), LevelFilter::DEBUG);
        assert_eq!(to_level_filter(LogLevel::Debug), LevelFilter::TRACE);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_log_directory_is_refused() {
        let td = tempfile::tempdir().unwrap();
        let real = td.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = td.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        let cfg = Config {
            log_file: Some(link.join("wide_fs.log")),
            ..Config::default()
        };
        let err = init_tracing(&cfg).unwrap_err();
        assert!(err.to_string().contains("symlink"), "{err}");
        assert!(!real.join("wide_fs.log").exists());
    }
}
