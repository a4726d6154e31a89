//! Filesystem operations.
//!
//! Every entry point takes a UTF-8 path, converts it to a NUL-terminated
//! UTF-16 buffer, makes one native call, maps any failure to a
//! [`WideFsError`](crate::WideFsError) tagged with the operation name, and
//! converts names or paths coming back from the OS to UTF-8.

mod attrs;
mod find;
mod handle;
mod open;
mod resolve;

pub use handle::{FileHandle, SearchHandle};
pub use open::{Disposition, OpenFlags};

use std::sync::Arc;

use crate::alloc::{BufferAllocator, Heap};
use crate::codec::{self, WideBuffer};
use crate::config::Config;
use crate::errors::Result;
use crate::{long_path, maperr};

/// Entry point for all operations.
///
/// Holds only immutable configuration and the buffer allocator, so it is
/// `Send + Sync` and can be shared freely.
#[derive(Debug, Clone)]
pub struct WideFs {
    config: Config,
    alloc: Arc<dyn BufferAllocator>,
}

impl WideFs {
    pub fn new(config: Config) -> Self {
        Self::with_allocator(config, Arc::new(Heap))
    }

    /// Route every intermediate buffer through `alloc` (failure injection, accounting).
    pub fn with_allocator(config: Config, alloc: Arc<dyn BufferAllocator>) -> Self {
        Self { config, alloc }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn allocator(&self) -> &dyn BufferAllocator {
        &*self.alloc
    }

    /// Caller path to the native form, verbatim-prefixed when long paths are enabled.
    fn path_to_wide(&self, op: &'static str, path: &str) -> Result<WideBuffer<'_>> {
        let wide = codec::to_wide(self.allocator(), path).map_err(|e| maperr::codec(op, Some(path), e))?;
        if self.config.long_paths && cfg!(windows) {
            return long_path::extend(self.allocator(), wide).map_err(|e| maperr::alloc(op, Some(path), e));
        }
        Ok(wide)
    }

    fn name_to_utf8(&self, op: &'static str, path: Option<&str>, units: &[u16]) -> Result<String> {
        codec::to_utf8(self.allocator(), units).map_err(|e| maperr::codec(op, path, e))
    }
}

impl Default for WideFs {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
