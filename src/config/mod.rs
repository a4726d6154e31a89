//! Configuration: types, default paths and XML loading.
//! Nothing here is required to use the filesystem operations; a default
//! [`Config`] works out of the box.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{load_config, load_config_from_xml_env, load_config_from_xml_path};

/// Environment variable naming an XML config file to load instead of the default.
pub const CONFIG_ENV: &str = "WIDE_FS_CONFIG";
