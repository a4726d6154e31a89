//! Typed error definitions for wide_fs.
//! Every failure carries the operation name and, where one exists, the path
//! the caller passed in, so callers can build a diagnostic without extra context.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::maperr;

pub type Result<T, E = WideFsError> = std::result::Result<T, E>;

/// Uniform error taxonomy that platform codes are mapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    InvalidArgument,
    BadHandle,
    OutOfMemory,
    TooManyOpenFiles,
    CrossDevice,
    DirectoryNotEmpty,
    NotADirectory,
    StorageFull,
    BrokenPipe,
    TryAgain,
    ExecFormat,
    ArgumentListTooLong,
    NoChildProcess,
    NameTooLong,
    /// No mapping exists; the raw platform code is preserved.
    Unknown(u32),
}

impl ErrorKind {
    /// Closest `std::io::ErrorKind`.
    pub fn as_io_kind(self) -> io::ErrorKind {
        match self {
            ErrorKind::NotFound => io::ErrorKind::NotFound,
            ErrorKind::PermissionDenied => io::ErrorKind::PermissionDenied,
            ErrorKind::AlreadyExists => io::ErrorKind::AlreadyExists,
            ErrorKind::InvalidArgument => io::ErrorKind::InvalidInput,
            ErrorKind::OutOfMemory => io::ErrorKind::OutOfMemory,
            ErrorKind::CrossDevice => io::ErrorKind::CrossesDevices,
            ErrorKind::DirectoryNotEmpty => io::ErrorKind::DirectoryNotEmpty,
            ErrorKind::NotADirectory => io::ErrorKind::NotADirectory,
            ErrorKind::StorageFull => io::ErrorKind::StorageFull,
            ErrorKind::BrokenPipe => io::ErrorKind::BrokenPipe,
            ErrorKind::TryAgain => io::ErrorKind::WouldBlock,
            ErrorKind::ArgumentListTooLong => io::ErrorKind::ArgumentListTooLong,
            ErrorKind::NameTooLong => io::ErrorKind::InvalidFilename,
            ErrorKind::BadHandle
            | ErrorKind::TooManyOpenFiles
            | ErrorKind::ExecFormat
            | ErrorKind::NoChildProcess
            | ErrorKind::Unknown(_) => io::ErrorKind::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "no such file or directory",
            ErrorKind::PermissionDenied => "permission denied",
            ErrorKind::AlreadyExists => "file exists",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::BadHandle => "bad file handle",
            ErrorKind::OutOfMemory => "not enough memory",
            ErrorKind::TooManyOpenFiles => "too many open files",
            ErrorKind::CrossDevice => "cross-device link",
            ErrorKind::DirectoryNotEmpty => "directory not empty",
            ErrorKind::NotADirectory => "not a directory",
            ErrorKind::StorageFull => "no space left on device",
            ErrorKind::BrokenPipe => "broken pipe",
            ErrorKind::TryAgain => "resource temporarily unavailable",
            ErrorKind::ExecFormat => "exec format error",
            ErrorKind::ArgumentListTooLong => "argument list too long",
            ErrorKind::NoChildProcess => "no child processes",
            ErrorKind::NameTooLong => "file name too long",
            ErrorKind::Unknown(code) => return write!(f, "unknown error {code}"),
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum WideFsError {
    #[error("{op}{}: UTF-8/UTF-16 conversion failed{}", path_suffix(.path), code_suffix(.code))]
    EncodingConversion {
        op: &'static str,
        path: Option<String>,
        code: Option<u32>,
    },

    #[error("{op}{}: could not allocate {bytes} bytes", path_suffix(.path))]
    Allocation {
        op: &'static str,
        path: Option<String>,
        bytes: usize,
    },

    #[error("{op}{}: {kind}{} [os code: {code}]", path_suffix(.path), maperr::hint(.code))]
    Platform {
        op: &'static str,
        path: Option<String>,
        code: u32,
        kind: ErrorKind,
    },
}

impl WideFsError {
    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            WideFsError::EncodingConversion { op, .. }
            | WideFsError::Allocation { op, .. }
            | WideFsError::Platform { op, .. } => op,
        }
    }

    /// Path argument of the failed call, if the operation takes one.
    pub fn path(&self) -> Option<&str> {
        match self {
            WideFsError::EncodingConversion { path, .. }
            | WideFsError::Allocation { path, .. }
            | WideFsError::Platform { path, .. } => path.as_deref(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WideFsError::EncodingConversion { .. } => ErrorKind::InvalidArgument,
            WideFsError::Allocation { .. } => ErrorKind::OutOfMemory,
            WideFsError::Platform { kind, .. } => *kind,
        }
    }

    /// Raw platform code, when one was reported.
    pub fn raw_os_error(&self) -> Option<u32> {
        match self {
            WideFsError::EncodingConversion { code, .. } => *code,
            WideFsError::Allocation { .. } => None,
            WideFsError::Platform { code, .. } => Some(*code),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<WideFsError> for io::Error {
    fn from(err: WideFsError) -> Self {
        io::Error::new(err.kind().as_io_kind(), err)
    }
}

fn path_suffix(path: &Option<String>) -> String {
    match path {
        Some(p) => format!(" '{p}'"),
        None => String::new(),
    }
}

fn code_suffix(code: &Option<u32>) -> String {
    match code {
        Some(c) => format!(" [os code: {c}]"),
        None => String::new(),
    }
}
