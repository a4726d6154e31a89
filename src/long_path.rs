//! Verbatim (`\\?\`) path rewriting.
//!
//! Windows refuses paths longer than `MAX_PATH` unless they are passed in the
//! verbatim form, which also switches off the OS-side normalisation. Only
//! absolute paths that need no normalisation are rewritten:
//! - `C:\dir\file`        -> `\\?\C:\dir\file`
//! - `\\server\share\x`   -> `\\?\UNC\server\share\x`
//! Relative paths, paths that already use a `\\?\` / `\\.\` prefix and paths
//! with `.` or `..` segments are returned unchanged.

use crate::alloc::{AllocError, Buffer, BufferAllocator};
use crate::codec::{WideBuffer, trim_nul};

const BACKSLASH: u16 = b'\\' as u16;
const SLASH: u16 = b'/' as u16;
const DOT: u16 = b'.' as u16;
const QUESTION: u16 = b'?' as u16;
const COLON: u16 = b':' as u16;

const VERBATIM: [u16; 4] = [BACKSLASH, BACKSLASH, QUESTION, BACKSLASH];
const VERBATIM_UNC: [u16; 8] = [
    BACKSLASH, BACKSLASH, QUESTION, BACKSLASH, b'U' as u16, b'N' as u16, b'C' as u16, BACKSLASH,
];

fn is_sep(u: u16) -> bool {
    u == BACKSLASH || u == SLASH
}

fn is_drive_letter(u: u16) -> bool {
    matches!(u, 0x41..=0x5A | 0x61..=0x7A)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Drive,
    Unc,
    Leave,
}

fn shape(units: &[u16]) -> Shape {
    // `\\?\`, `\??\`, `\\.\` and their slash variants are already device paths.
    if units.len() >= 4 && is_sep(units[0]) && is_sep(units[3]) && matches!(units[2], QUESTION | DOT) {
        if is_sep(units[1]) || units[1] == QUESTION {
            return Shape::Leave;
        }
    }
    let has_dot_segment = units
        .split(|&u| is_sep(u))
        .any(|seg| seg == [DOT] || seg == [DOT, DOT]);
    if has_dot_segment {
        return Shape::Leave;
    }
    match units {
        [d, COLON, sep, ..] if is_drive_letter(*d) && is_sep(*sep) => Shape::Drive,
        [a, b, c, ..] if is_sep(*a) && is_sep(*b) && !is_sep(*c) => Shape::Unc,
        _ => Shape::Leave,
    }
}

/// Rewrite a NUL-terminated wide path into its verbatim form when it is safe
/// to do so; otherwise hand the buffer back untouched.
pub fn extend<'a>(alloc: &'a dyn BufferAllocator, wide: WideBuffer<'a>) -> Result<WideBuffer<'a>, AllocError> {
    let units = trim_nul(&wide);
    let (prefix, rest): (&[u16], &[u16]) = match shape(units) {
        Shape::Leave => return Ok(wide),
        Shape::Drive => (&VERBATIM[..], units),
        Shape::Unc => (&VERBATIM_UNC[..], &units[2..]),
    };
    let mut out = Buffer::zeroed(alloc, prefix.len() + rest.len() + 1)?;
    out[..prefix.len()].copy_from_slice(prefix);
    for (slot, &u) in out[prefix.len()..].iter_mut().zip(rest) {
        *slot = if u == SLASH { BACKSLASH } else { u };
    }
    Ok(out)
}
