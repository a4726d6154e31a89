//! Windows implementations of the native primitives: thin wrappers around the
//! wide-character Win32 calls that return `Err(GetLastError())` on failure.
//!
//! Handles are kept as `isize` so the wrappers stay `Send`.

use std::ptr;

use tracing::trace;
use windows_sys::Win32::{
    Foundation::{CloseHandle, GetLastError, INVALID_HANDLE_VALUE},
    Globalization::{CP_UTF8, MB_ERR_INVALID_CHARS, MultiByteToWideChar, WC_ERR_INVALID_CHARS, WideCharToMultiByte},
    Security::SECURITY_ATTRIBUTES,
    Storage::FileSystem::{
        CreateFileW, FindClose, FindFirstFileW, FindNextFileW, GetFileAttributesW, GetFullPathNameW,
        INVALID_FILE_ATTRIBUTES, WIN32_FIND_DATAW,
    },
};

use super::FindData;

pub type RawFile = isize; // HANDLE

/// Search handle returned by `FindFirstFileW`.
#[derive(Debug)]
pub struct RawSearch(isize);

fn last_error() -> u32 {
    unsafe { GetLastError() }
}

/// Buffer lengths cross the API as `i32`; anything larger cannot be converted.
fn len_i32(len: usize) -> Result<i32, u32> {
    i32::try_from(len).map_err(|_| crate::win32::ERROR_INVALID_PARAMETER)
}

pub fn utf8_to_utf16(src: &str, dst: Option<&mut [u16]>) -> Result<usize, u32> {
    let src_len = len_i32(src.len())?;
    let (out, out_len) = match dst {
        Some(buf) => (buf.as_mut_ptr(), len_i32(buf.len())?),
        None => (ptr::null_mut(), 0),
    };
    let n = unsafe { MultiByteToWideChar(CP_UTF8, MB_ERR_INVALID_CHARS, src.as_ptr(), src_len, out, out_len) };
    if n <= 0 {
        return Err(last_error());
    }
    Ok(n as usize)
}

pub fn utf16_to_utf8(src: &[u16], dst: Option<&mut [u8]>) -> Result<usize, u32> {
    let src_len = len_i32(src.len())?;
    let (out, out_len) = match dst {
        Some(buf) => (buf.as_mut_ptr(), len_i32(buf.len())?),
        None => (ptr::null_mut(), 0),
    };
    let n = unsafe {
        WideCharToMultiByte(
            CP_UTF8,
            WC_ERR_INVALID_CHARS,
            src.as_ptr(),
            src_len,
            out,
            out_len,
            ptr::null(),
            ptr::null_mut(),
        )
    };
    if n <= 0 {
        return Err(last_error());
    }
    Ok(n as usize)
}

/// `path` must be NUL-terminated.
pub fn get_file_attributes(path: &[u16]) -> Result<u32, u32> {
    let attrs = unsafe { GetFileAttributesW(path.as_ptr()) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return Err(last_error());
    }
    Ok(attrs)
}

/// `path` must be NUL-terminated.
pub fn create_file(
    path: &[u16],
    access: u32,
    share: u32,
    disposition: u32,
    attributes: u32,
    inherit: bool,
) -> Result<RawFile, u32> {
    let security = SECURITY_ATTRIBUTES {
        nLength: std::mem::size_of::<SECURITY_ATTRIBUTES>() as u32,
        lpSecurityDescriptor: ptr::null_mut(),
        bInheritHandle: i32::from(inherit),
    };
    let handle = unsafe {
        CreateFileW(
            path.as_ptr(),
            access,
            share,
            &security,
            disposition,
            attributes,
            ptr::null_mut(),
        )
    };
    if handle == INVALID_HANDLE_VALUE {
        return Err(last_error());
    }
    let raw = handle as isize;
    trace!(handle = raw, access, disposition, "opened");
    Ok(raw)
}

pub fn close_file(file: RawFile) -> Result<(), u32> {
    if unsafe { CloseHandle(file as _) } == 0 {
        return Err(last_error());
    }
    Ok(())
}

fn copy_find_data(raw: &WIN32_FIND_DATAW, data: &mut FindData) {
    // cFileName is NUL-terminated and never longer than MAX_PATH.
    data.set_file_name(crate::codec::trim_nul(&raw.cFileName).iter().copied());
}

/// `pattern` must be NUL-terminated.
pub fn find_first(pattern: &[u16], data: &mut FindData) -> Result<RawSearch, u32> {
    let mut raw: WIN32_FIND_DATAW = unsafe { std::mem::zeroed() };
    let handle = unsafe { FindFirstFileW(pattern.as_ptr(), &mut raw) };
    if handle == INVALID_HANDLE_VALUE {
        return Err(last_error());
    }
    copy_find_data(&raw, data);
    Ok(RawSearch(handle as isize))
}

pub fn find_next(search: &mut RawSearch, data: &mut FindData) -> Result<(), u32> {
    let mut raw: WIN32_FIND_DATAW = unsafe { std::mem::zeroed() };
    if unsafe { FindNextFileW(search.0 as _, &mut raw) } == 0 {
        return Err(last_error());
    }
    copy_find_data(&raw, data);
    Ok(())
}

pub fn find_close(search: RawSearch) -> Result<(), u32> {
    if unsafe { FindClose(search.0 as _) } == 0 {
        return Err(last_error());
    }
    Ok(())
}

/// `path` must be NUL-terminated. Returns the required size (terminator
/// included) when `buf` is absent or too small, else the length written.
pub fn get_full_path_name(path: &[u16], buf: Option<&mut [u16]>) -> Result<usize, u32> {
    let (out, out_len) = match buf {
        Some(b) => (b.as_mut_ptr(), b.len().min(u32::MAX as usize) as u32),
        None => (ptr::null_mut(), 0),
    };
    let n = unsafe { GetFullPathNameW(path.as_ptr(), out_len, out, ptr::null_mut()) };
    if n == 0 {
        return Err(last_error());
    }
    Ok(n as usize)
}
