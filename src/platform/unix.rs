//! Unix implementations of the native primitives.
//!
//! Notes:
//! - Everything speaks the Win32 contract (UTF-16 paths, Win32 error codes,
//!   sizing calls) so the layers above behave identically on every host.
//! - Search patterns use Win32 wildcards (`*`, `?`) in the last component only;
//!   `.` and `..` are reported for non-root directories, as FindFirstFileW does.
//! - Full paths are computed lexically against the current directory, like
//!   GetFullPathNameW: symlinks are not resolved.
//! - Attribute queries describe a symlink itself, as GetFileAttributesW does,
//!   so a dangling link still exists. A link to a directory counts as one.
//! - `TRUNCATE_EXISTING` without write access is refused before `open(2)`,
//!   which would otherwise truncate a file opened read-only.

use std::collections::VecDeque;
use std::env;
use std::ffi::CString;
use std::fmt;
use std::fs::{self, ReadDir};
use std::io;
use std::mem::MaybeUninit;
use std::os::fd::RawFd;
use std::os::unix::ffi::OsStrExt;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{trace, warn};

use super::FindData;
use crate::codec::trim_nul;
use crate::win32::*;

pub type RawFile = RawFd;

const MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Open search cursor: remaining directory entries plus the compiled wildcard.
pub struct RawSearch {
    entries: ReadDir,
    matcher: Pattern,
    pending: VecDeque<&'static str>,
}

impl fmt::Debug for RawSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSearch")
            .field("pattern", &self.matcher.as_str())
            .field("pending", &self.pending)
            .finish()
    }
}

impl RawSearch {
    fn advance(&mut self, data: &mut FindData) -> Result<(), u32> {
        if let Some(dot) = self.pending.pop_front() {
            data.set_file_name(dot.encode_utf16());
            return Ok(());
        }
        for entry in self.entries.by_ref() {
            let entry = entry.map_err(|e| code_for(&e, Path::new("")))?;
            let raw_name = entry.file_name();
            let Some(name) = raw_name.to_str() else {
                warn!(name = ?raw_name, "skipping directory entry whose name is not valid Unicode");
                continue;
            };
            if !self.matcher.matches_with(name, MATCH) {
                continue;
            }
            if !data.set_file_name(name.encode_utf16()) {
                return Err(ERROR_FILENAME_EXCED_RANGE);
            }
            return Ok(());
        }
        Err(ERROR_NO_MORE_FILES)
    }
}

pub fn utf8_to_utf16(src: &str, dst: Option<&mut [u16]>) -> Result<usize, u32> {
    let needed = src.encode_utf16().count();
    let Some(out) = dst else {
        return Ok(needed);
    };
    if out.len() < needed {
        return Err(ERROR_INSUFFICIENT_BUFFER);
    }
    for (slot, unit) in out.iter_mut().zip(src.encode_utf16()) {
        *slot = unit;
    }
    Ok(needed)
}

pub fn utf16_to_utf8(src: &[u16], dst: Option<&mut [u8]>) -> Result<usize, u32> {
    let mut needed = 0;
    for ch in char::decode_utf16(src.iter().copied()) {
        needed += ch.map_err(|_| ERROR_NO_UNICODE_TRANSLATION)?.len_utf8();
    }
    let Some(out) = dst else {
        return Ok(needed);
    };
    if out.len() < needed {
        return Err(ERROR_INSUFFICIENT_BUFFER);
    }
    let mut at = 0;
    for ch in char::decode_utf16(src.iter().copied()).flatten() {
        at += ch.encode_utf8(&mut out[at..]).len();
    }
    Ok(at)
}

pub fn get_file_attributes(path: &[u16]) -> Result<u32, u32> {
    let path = PathBuf::from(decode(path)?);
    let meta = fs::symlink_metadata(&path).map_err(|e| code_for(&e, &path))?;
    if !meta.file_type().is_symlink() {
        return Ok(attributes(meta.is_dir(), meta.permissions().readonly()));
    }
    // Unix links are untyped; take the directory bit from a live target.
    let target_is_dir = fs::metadata(&path).map(|t| t.is_dir()).unwrap_or(false);
    let mut attrs = FILE_ATTRIBUTE_REPARSE_POINT;
    if target_is_dir {
        attrs |= FILE_ATTRIBUTE_DIRECTORY;
    }
    Ok(attrs)
}

/// `open(2)` with the Win32 access/disposition/attribute values translated.
/// Share mode has no POSIX counterpart and descriptors are inheritable by default.
pub fn create_file(
    path: &[u16],
    access: u32,
    _share: u32,
    disposition: u32,
    attributes: u32,
    _inherit: bool,
) -> Result<RawFile, u32> {
    let path = PathBuf::from(decode(path)?);
    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| ERROR_INVALID_NAME)?;
    if disposition == TRUNCATE_EXISTING && access & GENERIC_WRITE == 0 {
        return Err(ERROR_INVALID_PARAMETER);
    }

    let mut flags = match (access & GENERIC_READ != 0, access & GENERIC_WRITE != 0) {
        (true, true) => libc::O_RDWR,
        (false, true) => libc::O_WRONLY,
        _ => libc::O_RDONLY,
    };
    flags |= match disposition {
        CREATE_NEW => libc::O_CREAT | libc::O_EXCL,
        CREATE_ALWAYS => libc::O_CREAT | libc::O_TRUNC,
        TRUNCATE_EXISTING => libc::O_TRUNC,
        OPEN_ALWAYS => libc::O_CREAT,
        OPEN_EXISTING => 0,
        _ => return Err(ERROR_INVALID_PARAMETER),
    };
    let mode: libc::c_uint = if attributes & FILE_ATTRIBUTE_READONLY != 0 { 0o444 } else { 0o666 };

    // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
    let fd = unsafe { libc::open(c_path.as_ptr(), flags, mode) };
    if fd == -1 {
        return Err(code_for(&io::Error::last_os_error(), &path));
    }
    // CreateFileW refuses directories unless backup semantics are requested.
    if is_directory_fd(fd) {
        // SAFETY: fd was opened above and is not shared.
        unsafe { libc::close(fd) };
        return Err(ERROR_ACCESS_DENIED);
    }
    trace!(path = %path.display(), fd, flags, "opened");
    Ok(fd)
}

pub fn close_file(file: RawFile) -> Result<(), u32> {
    // SAFETY: the caller hands over ownership of the descriptor.
    if unsafe { libc::close(file) } == -1 {
        return Err(code_for(&io::Error::last_os_error(), Path::new("")));
    }
    Ok(())
}

pub fn find_first(pattern: &[u16], data: &mut FindData) -> Result<RawSearch, u32> {
    let pattern = decode(pattern)?;
    let (dir, mask) = split_pattern(&pattern);
    if mask.is_empty() {
        return Err(ERROR_FILE_NOT_FOUND);
    }
    let matcher = wildcard(mask)?;
    let entries = fs::read_dir(&dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ERROR_PATH_NOT_FOUND,
        _ => code_for(&e, &dir),
    })?;

    let mut pending = VecDeque::new();
    if dir.parent().is_some() {
        pending.extend([".", ".."].into_iter().filter(|dot| matcher.matches_with(dot, MATCH)));
    }

    let mut search = RawSearch {
        entries,
        matcher,
        pending,
    };
    match search.advance(data) {
        Ok(()) => Ok(search),
        Err(ERROR_NO_MORE_FILES) => Err(ERROR_FILE_NOT_FOUND),
        Err(code) => Err(code),
    }
}

pub fn find_next(search: &mut RawSearch, data: &mut FindData) -> Result<(), u32> {
    search.advance(data)
}

pub fn find_close(search: RawSearch) -> Result<(), u32> {
    drop(search);
    Ok(())
}

/// GetFullPathNameW contract: with no (or a too small) buffer, returns the
/// required size including the terminator; otherwise fills the buffer and
/// returns the length without it.
pub fn get_full_path_name(path: &[u16], buf: Option<&mut [u16]>) -> Result<usize, u32> {
    let input = decode(path)?;
    let full = lexical_absolute(Path::new(&input))?;
    let full = full.to_str().ok_or(ERROR_NO_UNICODE_TRANSLATION)?;
    let needed = full.encode_utf16().count();
    match buf {
        Some(out) if out.len() > needed => {
            for (slot, unit) in out.iter_mut().zip(full.encode_utf16()) {
                *slot = unit;
            }
            out[needed] = 0;
            Ok(needed)
        }
        _ => Ok(needed + 1),
    }
}

fn decode(path: &[u16]) -> Result<String, u32> {
    let s = String::from_utf16(trim_nul(path)).map_err(|_| ERROR_NO_UNICODE_TRANSLATION)?;
    if s.is_empty() {
        return Err(ERROR_PATH_NOT_FOUND);
    }
    Ok(s)
}

fn attributes(is_dir: bool, readonly: bool) -> u32 {
    let mut attrs = 0;
    if is_dir {
        attrs |= FILE_ATTRIBUTE_DIRECTORY;
    }
    if readonly {
        attrs |= FILE_ATTRIBUTE_READONLY;
    }
    if attrs == 0 { FILE_ATTRIBUTE_NORMAL } else { attrs }
}

fn is_directory_fd(fd: RawFd) -> bool {
    let mut st = MaybeUninit::<libc::stat>::uninit();
    // SAFETY: fd is open and fstat fully initialises `st` when it returns 0.
    unsafe { libc::fstat(fd, st.as_mut_ptr()) == 0 && (st.assume_init().st_mode & libc::S_IFMT) == libc::S_IFDIR }
}

/// Split `dir/mask` at the last separator; a bare mask searches the current directory.
fn split_pattern(pattern: &str) -> (PathBuf, &str) {
    match pattern.rfind('/') {
        Some(0) => (PathBuf::from("/"), &pattern[1..]),
        Some(i) => (PathBuf::from(&pattern[..i]), &pattern[i + 1..]),
        None => (PathBuf::from("."), pattern),
    }
}

/// Compile a Win32 wildcard. Brackets are literal there, and `*.*` means "everything".
fn wildcard(mask: &str) -> Result<Pattern, u32> {
    let mask = if mask == "*.*" { "*" } else { mask };
    let mut escaped = String::with_capacity(mask.len());
    for c in mask.chars() {
        match c {
            '[' => escaped.push_str("[[]"),
            ']' => escaped.push_str("[]]"),
            '*' if escaped.ends_with('*') => {}
            c => escaped.push(c),
        }
    }
    Pattern::new(&escaped).map_err(|_| ERROR_INVALID_NAME)
}

fn lexical_absolute(path: &Path) -> Result<PathBuf, u32> {
    let mut out = if path.is_absolute() {
        PathBuf::from("/")
    } else {
        env::current_dir().map_err(|e| code_for(&e, path))?
    };
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => out.push(name),
        }
    }
    Ok(out)
}

/// Missing leaf vs. missing parent, the way Win32 distinguishes them.
fn not_found_code(path: &Path) -> u32 {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => ERROR_PATH_NOT_FOUND,
        _ => ERROR_FILE_NOT_FOUND,
    }
}

fn code_for(err: &io::Error, path: &Path) -> u32 {
    let Some(errno) = err.raw_os_error() else {
        return match err.kind() {
            io::ErrorKind::NotFound => not_found_code(path),
            io::ErrorKind::PermissionDenied => ERROR_ACCESS_DENIED,
            io::ErrorKind::AlreadyExists => ERROR_FILE_EXISTS,
            io::ErrorKind::InvalidInput => ERROR_INVALID_PARAMETER,
            _ => ERROR_GEN_FAILURE,
        };
    };
    match errno {
        libc::ENOENT => not_found_code(path),
        libc::ENOTDIR => ERROR_PATH_NOT_FOUND,
        libc::EACCES | libc::EPERM | libc::EISDIR => ERROR_ACCESS_DENIED,
        libc::EEXIST => ERROR_FILE_EXISTS,
        libc::ENAMETOOLONG => ERROR_FILENAME_EXCED_RANGE,
        libc::ENOSPC | libc::EDQUOT => ERROR_DISK_FULL,
        libc::EMFILE | libc::ENFILE => ERROR_TOO_MANY_OPEN_FILES,
        libc::EROFS => ERROR_WRITE_PROTECT,
        libc::ENOTEMPTY => ERROR_DIR_NOT_EMPTY,
        libc::EINVAL => ERROR_INVALID_PARAMETER,
        libc::ENOMEM => ERROR_NOT_ENOUGH_MEMORY,
        libc::EBADF => ERROR_INVALID_HANDLE,
        libc::EXDEV => ERROR_NOT_SAME_DEVICE,
        libc::ELOOP => ERROR_CANT_RESOLVE_FILENAME,
        libc::EBUSY | libc::ETXTBSY => ERROR_SHARING_VIOLATION,
        libc::EILSEQ => ERROR_NO_UNICODE_TRANSLATION,
        other => {
            trace!(errno = other, "no Win32 equivalent for errno");
            ERROR_GEN_FAILURE
        }
    }
}
