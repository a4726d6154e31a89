//! `open`: POSIX-style flags translated into a native create call.
//!
//! Access rights follow the legacy mapping, which ORs the rights of every
//! access flag present; a flag set with no access flag at all asks for zero
//! rights instead of being rejected.

use bitflags::bitflags;
use tracing::trace;

use super::{FileHandle, WideFs};
use crate::errors::Result;
use crate::maperr;
use crate::platform;
use crate::win32::{
    CREATE_ALWAYS, CREATE_NEW, FILE_ATTRIBUTE_NORMAL, FILE_ATTRIBUTE_READONLY, FILE_SHARE_READ, FILE_SHARE_WRITE,
    GENERIC_READ, GENERIC_WRITE, OPEN_ALWAYS, OPEN_EXISTING, TRUNCATE_EXISTING,
};

bitflags! {
    /// Open flags understood by [`WideFs::open`].
    ///
    /// `NONBLOCK`, `APPEND`, `NOCTTY` and the sync flags are accepted and
    /// ignored: the native create call has no counterpart for them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OpenFlags: u32 {
        const READ_ONLY  = 1 << 0;
        const WRITE_ONLY = 1 << 1;
        const READ_WRITE = 1 << 2;
        const NONBLOCK   = 1 << 3;
        const APPEND     = 1 << 4;
        const CREATE     = 1 << 5;
        const TRUNCATE   = 1 << 6;
        const EXCLUSIVE  = 1 << 7;
        const NOCTTY     = 1 << 8;
        const DSYNC      = 1 << 9;
        const SYNC       = 1 << 10;
        const RSYNC      = 1 << 11;
    }
}

/// What to do when the target exists or is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Fail if it exists.
    CreateNew,
    /// Create, or overwrite and truncate.
    CreateAlways,
    /// Truncate; fail if missing.
    TruncateExisting,
    /// Open, creating if missing.
    OpenAlways,
    /// Open; fail if missing.
    OpenExisting,
}

impl Disposition {
    /// First matching rule wins.
    pub fn from_flags(flags: OpenFlags) -> Self {
        let create = flags.contains(OpenFlags::CREATE);
        let truncate = flags.contains(OpenFlags::TRUNCATE);
        if create && flags.contains(OpenFlags::EXCLUSIVE) {
            Disposition::CreateNew
        } else if create && truncate {
            Disposition::CreateAlways
        } else if truncate {
            Disposition::TruncateExisting
        } else if create {
            Disposition::OpenAlways
        } else {
            Disposition::OpenExisting
        }
    }

    pub fn as_win32(self) -> u32 {
        match self {
            Disposition::CreateNew => CREATE_NEW,
            Disposition::CreateAlways => CREATE_ALWAYS,
            Disposition::TruncateExisting => TRUNCATE_EXISTING,
            Disposition::OpenAlways => OPEN_ALWAYS,
            Disposition::OpenExisting => OPEN_EXISTING,
        }
    }
}

pub(crate) fn access_rights(flags: OpenFlags) -> u32 {
    let mut rights = 0;
    if flags.contains(OpenFlags::READ_ONLY) {
        rights |= GENERIC_READ;
    }
    if flags.contains(OpenFlags::WRITE_ONLY) {
        rights |= GENERIC_WRITE;
    }
    if flags.contains(OpenFlags::READ_WRITE) {
        rights |= GENERIC_READ | GENERIC_WRITE;
    }
    rights
}

/// Newly created files whose mode denies owner-write become read-only.
pub(crate) fn file_attributes(flags: OpenFlags, mode: u32) -> u32 {
    if flags.contains(OpenFlags::CREATE) && mode & 0o200 == 0 {
        FILE_ATTRIBUTE_READONLY
    } else {
        FILE_ATTRIBUTE_NORMAL
    }
}

impl WideFs {
    /// Open or create `path`.
    ///
    /// Other processes may read and write the file concurrently and the
    /// handle is inherited by child processes.
    pub fn open(&self, path: &str, flags: OpenFlags, mode: u32) -> Result<FileHandle> {
        const OP: &str = "open";
        let wide = self.path_to_wide(OP, path)?;
        let disposition = Disposition::from_flags(flags);
        let raw = platform::create_file(
            &wide,
            access_rights(flags),
            FILE_SHARE_READ | FILE_SHARE_WRITE,
            disposition.as_win32(),
            file_attributes(flags, mode),
            true,
        )
        .map_err(|code| maperr::platform(OP, Some(path), code))?;
        trace!(path, ?flags, ?disposition, "open");
        Ok(FileHandle::new(raw))
    }
}
