//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use dirs::{config_dir, data_dir};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wide_fs";

/// OS-appropriate default config path.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(base) = config_dir() {
        Some(base.join(APP_DIR).join("config.xml"))
    } else {
        std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config").join(APP_DIR).join("config.xml"))
    }
}

/// OS-appropriate default log file path (data dir). Nothing is created here.
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(base) = data_dir() {
        Some(base.join(APP_DIR).join("wide_fs.log"))
    } else {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join(APP_DIR)
                .join("wide_fs.log")
        })
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if fs::symlink_metadata(anc).is_ok_and(|m| m.file_type().is_symlink()) {
            return Ok(true);
        }
        p = anc.parent();
    }
    Ok(false)
}
