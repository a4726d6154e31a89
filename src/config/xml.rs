//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Lookup order: `WIDE_FS_CONFIG`, then the per-OS default path, then defaults.
//!
//! Example:
//! <config>
//!   <long_paths>true</long_paths>
//!   <log_level>debug</log_level>
//!   <log_file>/var/log/wide_fs.log</log_file>
//!   <json_logs>false</json_logs>
//! </config>
//!
//! Unknown elements are rejected so typos do not silently fall back to defaults.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::{Deserialize, Deserializer};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::CONFIG_ENV;
use super::paths::default_config_path;
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    long_paths: Option<bool>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    json_logs: Option<bool>,
}

// Booleans tolerate surrounding whitespace; an empty element means "unset".
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let opt: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = opt else { return Ok(None) };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        other => Err(D::Error::custom(format!("invalid boolean '{other}'"))),
    }
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(enabled) = parsed.long_paths {
        cfg.long_paths = enabled;
    }
    if let Some(enabled) = parsed.json_logs {
        cfg.json_logs = enabled;
    }
    if let Some(s) = parsed.log_level.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_level = trimmed.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// If `WIDE_FS_CONFIG` is set, load and return that Config; otherwise Ok(None).
pub fn load_config_from_xml_env() -> Result<Option<Config>> {
    let Some(p) = env::var_os(CONFIG_ENV) else {
        return Ok(None);
    };
    debug!(path = ?p, "loading config from {CONFIG_ENV}");
    load_config_from_xml_path(Path::new(&p)).map(Some)
}

/// `WIDE_FS_CONFIG`, else the default config file if it exists, else defaults.
pub fn load_config() -> Result<Config> {
    if let Some(cfg) = load_config_from_xml_env()? {
        return Ok(cfg);
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading config from default path");
            load_config_from_xml_path(&path)
        }
        _ => Ok(Config::default()),
    }
}
