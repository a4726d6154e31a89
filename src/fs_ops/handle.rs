//! Handles returned to the caller.
//!
//! Ownership transfers fully on return: nothing here closes a handle on drop.
//! Close explicitly, or turn a [`FileHandle`] into a `std::fs::File` and let
//! the standard library own it.

use std::fs::File;

use crate::errors::Result;
use crate::maperr;
use crate::platform::{self, RawFile, RawSearch};

/// Open file returned by [`WideFs::open`](crate::WideFs::open).
#[must_use = "file handles are not closed on drop; call `close` or convert into `std::fs::File`"]
#[derive(Debug)]
pub struct FileHandle {
    raw: RawFile,
}

impl FileHandle {
    pub(crate) fn new(raw: RawFile) -> Self {
        Self { raw }
    }

    /// Native handle (file descriptor on Unix, `HANDLE` on Windows).
    pub fn as_raw(&self) -> RawFile {
        self.raw
    }

    /// Give up ownership of the native handle.
    pub fn into_raw(self) -> RawFile {
        self.raw
    }

    /// # Safety
    /// `raw` must be an open file handle not owned by anything else.
    pub unsafe fn from_raw(raw: RawFile) -> Self {
        Self { raw }
    }

    pub fn close(self) -> Result<()> {
        platform::close_file(self.raw).map_err(|code| maperr::platform("close", None, code))
    }
}

impl From<FileHandle> for File {
    fn from(handle: FileHandle) -> Self {
        #[cfg(unix)]
        {
            use std::os::fd::FromRawFd;
            // SAFETY: FileHandle exclusively owns an open descriptor.
            unsafe { File::from_raw_fd(handle.into_raw()) }
        }
        #[cfg(windows)]
        {
            use std::os::windows::io::FromRawHandle;
            // SAFETY: FileHandle exclusively owns an open handle.
            unsafe { File::from_raw_handle(handle.into_raw() as _) }
        }
    }
}

/// Open directory search returned by [`WideFs::find_first`](crate::WideFs::find_first).
#[must_use = "search handles are not closed on drop; call `close`"]
#[derive(Debug)]
pub struct SearchHandle {
    raw: RawSearch,
}

impl SearchHandle {
    pub(crate) fn new(raw: RawSearch) -> Self {
        Self { raw }
    }

    pub(crate) fn raw_mut(&mut self) -> &mut RawSearch {
        &mut self.raw
    }

    pub fn close(self) -> Result<()> {
        platform::find_close(self.raw).map_err(|code| maperr::platform("closedir", None, code))
    }
}
