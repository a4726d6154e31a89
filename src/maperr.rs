//! Platform error mapping.
//!
//! Translates raw Win32 codes into [`ErrorKind`] (following the classic
//! Win32 -> errno table) and builds [`WideFsError`] values with the operation
//! name and path attached. Message hints are appended for the codes users hit
//! most often.

use tracing::debug;

use crate::alloc::AllocError;
use crate::codec::CodecError;
use crate::errors::{ErrorKind, WideFsError};
use crate::win32::*;

/// Map a raw Win32 code into the uniform taxonomy.
pub fn map_win32(code: u32) -> ErrorKind {
    match code {
        ERROR_FILE_NOT_FOUND
        | ERROR_PATH_NOT_FOUND
        | ERROR_INVALID_DRIVE
        | ERROR_NO_MORE_FILES
        | ERROR_BAD_NETPATH
        | ERROR_BAD_NET_NAME
        | ERROR_BAD_PATHNAME => ErrorKind::NotFound,

        ERROR_ACCESS_DENIED
        | ERROR_CURRENT_DIRECTORY
        | ERROR_LOCK_VIOLATION
        | ERROR_NETWORK_ACCESS_DENIED
        | ERROR_CANNOT_MAKE
        | ERROR_FAIL_I24
        | ERROR_DRIVE_LOCKED
        | ERROR_SEEK_ON_DEVICE
        | ERROR_NOT_LOCKED
        | ERROR_LOCK_FAILED => ErrorKind::PermissionDenied,
        ERROR_WRITE_PROTECT..=ERROR_SHARING_BUFFER_EXCEEDED => ErrorKind::PermissionDenied,

        ERROR_FILE_EXISTS | ERROR_ALREADY_EXISTS => ErrorKind::AlreadyExists,

        ERROR_INVALID_FUNCTION
        | ERROR_INVALID_ACCESS
        | ERROR_INVALID_DATA
        | ERROR_INVALID_PARAMETER
        | ERROR_NEGATIVE_SEEK
        | ERROR_INVALID_NAME
        | ERROR_NO_UNICODE_TRANSLATION => ErrorKind::InvalidArgument,

        ERROR_INVALID_HANDLE | ERROR_INVALID_TARGET_HANDLE | ERROR_DIRECT_ACCESS_HANDLE => {
            ErrorKind::BadHandle
        }

        ERROR_ARENA_TRASHED | ERROR_NOT_ENOUGH_MEMORY | ERROR_INVALID_BLOCK | ERROR_NOT_ENOUGH_QUOTA => {
            ErrorKind::OutOfMemory
        }

        ERROR_TOO_MANY_OPEN_FILES => ErrorKind::TooManyOpenFiles,
        ERROR_NOT_SAME_DEVICE => ErrorKind::CrossDevice,
        ERROR_DIR_NOT_EMPTY => ErrorKind::DirectoryNotEmpty,
        ERROR_DIRECTORY => ErrorKind::NotADirectory,
        ERROR_DISK_FULL => ErrorKind::StorageFull,
        ERROR_BROKEN_PIPE | ERROR_NO_DATA => ErrorKind::BrokenPipe,
        ERROR_NO_PROC_SLOTS | ERROR_MAX_THRDS_REACHED | ERROR_NESTING_NOT_ALLOWED => {
            ErrorKind::TryAgain
        }
        ERROR_BAD_FORMAT => ErrorKind::ExecFormat,
        ERROR_INVALID_STARTING_CODESEG..=ERROR_INFLOOP_IN_RELOC_CHAIN => ErrorKind::ExecFormat,
        ERROR_BAD_ENVIRONMENT => ErrorKind::ArgumentListTooLong,
        ERROR_WAIT_NO_CHILDREN | ERROR_CHILD_NOT_COMPLETE => ErrorKind::NoChildProcess,
        ERROR_FILENAME_EXCED_RANGE => ErrorKind::NameTooLong,

        other => ErrorKind::Unknown(other),
    }
}

/// True for the two codes `exists` turns into `false`.
pub fn is_not_found_code(code: u32) -> bool {
    code == ERROR_FILE_NOT_FOUND || code == ERROR_PATH_NOT_FOUND
}

/// Actionable suffix for common codes (empty when there is nothing useful to add).
pub(crate) fn hint(code: &u32) -> &'static str {
    match *code {
        ERROR_ACCESS_DENIED => "; access denied, check permissions",
        ERROR_NOT_SAME_DEVICE => "; not same device, cross-filesystem operation",
        ERROR_SHARING_VIOLATION => "; sharing violation, file is in use",
        ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND => "; path not found, verify it exists",
        ERROR_FILE_EXISTS | ERROR_ALREADY_EXISTS => "; already exists, pick a unique name",
        ERROR_DISK_FULL => "; insufficient disk space",
        ERROR_WRITE_PROTECT => "; write protected or read-only media",
        ERROR_FILENAME_EXCED_RANGE => "; filename or path too long, consider enabling long_paths",
        ERROR_TOO_MANY_OPEN_FILES => "; too many open files, close handles or increase limit",
        ERROR_NO_UNICODE_TRANSLATION => "; name is not valid Unicode",
        _ => "",
    }
}

pub(crate) fn platform(op: &'static str, path: Option<&str>, code: u32) -> WideFsError {
    let kind = map_win32(code);
    debug!(op, path = path.unwrap_or(""), code, kind = %kind, "platform call failed");
    WideFsError::Platform {
        op,
        path: path.map(str::to_owned),
        code,
        kind,
    }
}

pub(crate) fn codec(op: &'static str, path: Option<&str>, err: CodecError) -> WideFsError {
    match err {
        CodecError::Allocation(AllocError { bytes }) => alloc(op, path, AllocError { bytes }),
        CodecError::Conversion { code } => {
            debug!(op, path = path.unwrap_or(""), code = ?code, "encoding conversion failed");
            WideFsError::EncodingConversion {
                op,
                path: path.map(str::to_owned),
                code,
            }
        }
    }
}

pub(crate) fn alloc(op: &'static str, path: Option<&str>, err: AllocError) -> WideFsError {
    debug!(op, path = path.unwrap_or(""), bytes = err.bytes, "buffer allocation failed");
    WideFsError::Allocation {
        op,
        path: path.map(str::to_owned),
        bytes: err.bytes,
    }
}
