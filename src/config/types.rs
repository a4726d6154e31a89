//! Core configuration types.
//! - Config holds runtime settings with conservative defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Verbosity of the diagnostics emitted by [`crate::logging::init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Adds failed native calls as they are mapped to errors
    Info,
    /// Every native call
    Debug,
}

impl LogLevel {
    /// Parse common string names into a LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for [`crate::WideFs`] and its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Rewrite absolute paths to the `\\?\` form before handing them to Windows
    pub long_paths: bool,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional log file (console output is always on)
    pub log_file: Option<PathBuf>,
    /// Emit JSON lines instead of the compact text format
    pub json_logs: bool,
}

impl Config {
    pub fn with_long_paths(mut self, enabled: bool) -> Self {
        self.long_paths = enabled;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let cfg = Config::default();
        assert!(!cfg.long_paths);
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert!(cfg.log_file.is_none());
        assert!(!cfg.json_logs);
    }

    #[test]
    fn log_level_display_round_trips() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn builders_set_fields() {
        let cfg = Config::default().with_long_paths(true).with_log_level(LogLevel::Debug);
        assert!(cfg.long_paths);
        assert_eq!(cfg.log_level, LogLevel::Debug);
    }
}
