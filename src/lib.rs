//! Core library for `wide_fs`.
//!
//! Unicode-safe filesystem primitives for UTF-8 callers on top of a
//! wide-character (UTF-16) native API: open with POSIX-style flags, attribute
//! queries, wildcard directory search and full path resolution.
//!
//! - Paths cross the native boundary through an exact two-phase conversion
//!   (size, reserve, fill, verify); a mismatch is an error, never a truncation.
//! - Every intermediate buffer is scoped to the call and released on every path.
//! - Failures carry the operation name, the caller's path and the raw OS code,
//!   mapped into a uniform [`ErrorKind`].
//! - End of a directory search is `Ok(None)`, not an error.
//!
//! On Windows the operations call the Win32 wide APIs directly; elsewhere the
//! same contract is emulated on POSIX so behaviour and error codes match.
//!
//! ```no_run
//! use wide_fs::prelude::*;
//!
//! let fs = WideFs::default();
//! if let Some((first, mut search)) = fs.find_first("logs/*.txt")? {
//!     println!("{first}");
//!     while let Some(name) = fs.find_next(&mut search)? {
//!         println!("{name}");
//!     }
//!     search.close()?;
//! }
//! # Ok::<(), wide_fs::WideFsError>(())
//! ```

use std::sync::OnceLock;

pub mod alloc;
pub mod codec;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod long_path;
pub mod maperr;
mod platform;
pub mod win32;

pub use crate::alloc::{AllocError, BufferAllocator, Heap};
pub use config::{
    Config, LogLevel, default_config_path, default_log_path, load_config, load_config_from_xml_env,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::{ErrorKind, Result, WideFsError};
pub use fs_ops::{Disposition, FileHandle, OpenFlags, SearchHandle, WideFs};
pub use platform::RawFile;

/// Commonly used items.
pub mod prelude {
    pub use crate::{ErrorKind, FileHandle, OpenFlags, SearchHandle, WideFs, WideFsError};
}

static DEFAULT_FS: OnceLock<WideFs> = OnceLock::new();

/// Process-wide instance with the default [`Config`], used by the free functions below.
pub fn default_fs() -> &'static WideFs {
    DEFAULT_FS.get_or_init(WideFs::default)
}

/// [`WideFs::open`] on the default instance.
pub fn open(path: &str, flags: OpenFlags, mode: u32) -> Result<FileHandle> {
    default_fs().open(path, flags, mode)
}

/// [`WideFs::is_directory`] on the default instance.
pub fn is_directory(path: &str) -> Result<bool> {
    default_fs().is_directory(path)
}

/// [`WideFs::exists`] on the default instance.
pub fn exists(path: &str) -> Result<bool> {
    default_fs().exists(path)
}

/// [`WideFs::find_first`] on the default instance.
pub fn find_first(pattern: &str) -> Result<Option<(String, SearchHandle)>> {
    default_fs().find_first(pattern)
}

/// [`WideFs::find_next`] on the default instance.
pub fn find_next(search: &mut SearchHandle) -> Result<Option<String>> {
    default_fs().find_next(search)
}

/// [`WideFs::get_full_path_name`] on the default instance.
pub fn get_full_path_name(path: &str) -> Result<String> {
    default_fs().get_full_path_name(path)
}
