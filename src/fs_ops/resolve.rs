//! Absolute path resolution.
//! - Size query without a buffer, then exactly one fill.
//! - If the fill needs more than the size query predicted, the call fails;
//!   there is no grow-and-retry.
//! - Purely lexical on every platform: `.` and `..` are folded, symlinks are
//!   not followed, the path does not have to exist.

use tracing::debug;

use super::WideFs;
use crate::alloc::Buffer;
use crate::codec;
use crate::errors::Result;
use crate::maperr;
use crate::platform;
use crate::win32::{ERROR_GEN_FAILURE, ERROR_INSUFFICIENT_BUFFER};

impl WideFs {
    /// Fully qualified form of `path`.
    pub fn get_full_path_name(&self, path: &str) -> Result<String> {
        self.full_path_with(path, platform::get_full_path_name)
    }

    /// `query(path, None)` reports the size needed (terminator included);
    /// `query(path, Some(buf))` fills `buf` and returns the length written,
    /// or the size needed when `buf` is too small.
    pub(crate) fn full_path_with<F>(&self, path: &str, mut query: F) -> Result<String>
    where
        F: FnMut(&[u16], Option<&mut [u16]>) -> std::result::Result<usize, u32>,
    {
        const OP: &str = "get_full_path_name";
        let alloc = self.allocator();
        let fail = |stage: &'static str, code: u32| {
            debug!(path, stage, code, "resolve failed");
            maperr::platform(OP, Some(path), code)
        };

        // No long-path rewriting here: the OS must see the path as given.
        let wide = codec::to_wide(alloc, path).map_err(|e| maperr::codec(OP, Some(path), e))?;

        let estimate = query(&wide[..], None).map_err(|code| fail("size query", code))?;
        if estimate == 0 {
            return Err(fail("size query", ERROR_GEN_FAILURE));
        }

        let mut out = Buffer::<u16>::zeroed(alloc, estimate).map_err(|e| maperr::alloc(OP, Some(path), e))?;
        let written = query(&wide[..], Some(&mut out[..])).map_err(|code| fail("fill", code))?;
        if written > estimate - 1 {
            return Err(fail("fill", ERROR_INSUFFICIENT_BUFFER));
        }

        codec::to_utf8(alloc, &out[..written]).map_err(|e| maperr::codec(OP, Some(path), e))
    }
}
