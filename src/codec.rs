//! UTF-8 <-> UTF-16 conversion.
//!
//! Both directions follow the same two-phase protocol: ask the platform
//! converter how many units are needed, reserve exactly that many, convert,
//! and refuse the result unless the converter wrote exactly what it predicted.
//! There is no grow-and-retry: a mismatch is a failure and the buffer is
//! released on the way out.

use thiserror::Error;

use crate::alloc::{AllocError, Buffer, BufferAllocator};
use crate::platform;
use crate::win32::ERROR_INVALID_NAME;

/// Owned UTF-16 buffer. Buffers produced by [`to_wide`] end with a NUL unit.
pub type WideBuffer<'a> = Buffer<'a, u16>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("conversion failed")]
    Conversion { code: Option<u32> },
    #[error(transparent)]
    Allocation(#[from] AllocError),
}

impl CodecError {
    fn os(code: u32) -> Self {
        CodecError::Conversion { code: Some(code) }
    }
}

/// Sizing call, exact reservation, fill, verify.
///
/// `convert(None)` must return the number of units required; `convert(Some(buf))`
/// fills `buf` and returns the number of units written. Platform failures are
/// reported as `Err(code)`.
pub(crate) fn two_phase<'a, T, F>(alloc: &'a dyn BufferAllocator, mut convert: F) -> Result<Buffer<'a, T>, CodecError>
where
    T: Copy + Default,
    F: FnMut(Option<&mut [T]>) -> Result<usize, u32>,
{
    let needed = convert(None).map_err(CodecError::os)?;
    if needed == 0 {
        return Err(CodecError::Conversion { code: None });
    }
    let mut buf = Buffer::zeroed(alloc, needed)?;
    let written = convert(Some(&mut buf[..])).map_err(CodecError::os)?;
    if written != needed {
        return Err(CodecError::Conversion { code: None });
    }
    Ok(buf)
}

/// Convert `s` to a NUL-terminated UTF-16 buffer suitable for the native API.
///
/// Interior NULs are rejected: the platform would silently stop reading at
/// the first one.
pub fn to_wide<'a>(alloc: &'a dyn BufferAllocator, s: &str) -> Result<WideBuffer<'a>, CodecError> {
    if s.as_bytes().contains(&0) {
        return Err(CodecError::os(ERROR_INVALID_NAME));
    }
    if s.is_empty() {
        return Ok(Buffer::zeroed(alloc, 1)?);
    }
    two_phase(alloc, |dst: Option<&mut [u16]>| match dst {
        None => platform::utf8_to_utf16(s, None).map(|n| n + 1),
        Some(out) => {
            let (body, nul) = out.split_at_mut(out.len() - 1);
            let n = platform::utf8_to_utf16(s, Some(body))?;
            nul[0] = 0;
            Ok(n + 1)
        }
    })
}

/// Convert UTF-16 units (no terminator) to an owned UTF-8 string.
///
/// Unpaired surrogates are a conversion failure, never a lossy replacement.
pub fn to_utf8(alloc: &dyn BufferAllocator, units: &[u16]) -> Result<String, CodecError> {
    if units.is_empty() {
        return Ok(String::new());
    }
    let buf = two_phase(alloc, |dst: Option<&mut [u8]>| platform::utf16_to_utf8(units, dst))?;
    String::from_utf8(buf.into_vec()).map_err(|_| CodecError::Conversion { code: None })
}

/// Units of a NUL-terminated buffer, without the terminator.
pub fn trim_nul(units: &[u16]) -> &[u16] {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    &units[..end]
}
