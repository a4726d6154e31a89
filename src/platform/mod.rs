//! Native primitives.
//! This module hides OS differences (Windows/Unix) behind a uniform API so the
//! operations above it can remain platform-agnostic.
//!
//! The contract is the Win32 one everywhere: paths are NUL-terminated UTF-16,
//! failures are Win32 error codes, sizing calls report units including the
//! terminator. On Windows the calls go straight to the OS; on Unix they are
//! emulated on top of POSIX.

use crate::win32::MAX_PATH;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{
    RawFile, RawSearch, close_file, create_file, find_close, find_first, find_next, get_file_attributes,
    get_full_path_name, utf8_to_utf16, utf16_to_utf8,
};

#[cfg(windows)]
pub use windows::{
    RawFile, RawSearch, close_file, create_file, find_close, find_first, find_next, get_file_attributes,
    get_full_path_name, utf8_to_utf16, utf16_to_utf8,
};

/// One entry reported by a directory search.
#[derive(Clone)]
pub struct FindData {
    file_name: [u16; MAX_PATH],
}

impl FindData {
    pub fn new() -> Self {
        Self {
            file_name: [0; MAX_PATH],
        }
    }

    /// Entry name, without the terminator.
    pub fn file_name(&self) -> &[u16] {
        crate::codec::trim_nul(&self.file_name)
    }

    /// Store `units` as the entry name; it must leave room for the terminator.
    pub(crate) fn set_file_name(&mut self, units: impl IntoIterator<Item = u16>) -> bool {
        let mut len = 0;
        for unit in units {
            if len == MAX_PATH - 1 {
                return false;
            }
            self.file_name[len] = unit;
            len += 1;
        }
        self.file_name[len] = 0;
        true
    }
}

impl Default for FindData {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FindData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FindData")
            .field("file_name", &String::from_utf16_lossy(self.file_name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_round_trips_through_fixed_field() {
        let mut data = FindData::new();
        assert!(data.set_file_name("résumé.txt".encode_utf16()));
        assert_eq!(String::from_utf16(data.file_name()).unwrap(), "résumé.txt");
    }

    #[test]
    fn overlong_name_is_refused() {
        let mut data = FindData::new();
        assert!(!data.set_file_name(std::iter::repeat_n(0x61u16, MAX_PATH)));
        assert!(data.set_file_name(std::iter::repeat_n(0x61u16, MAX_PATH - 1)));
        assert_eq!(data.file_name().len(), MAX_PATH - 1);
    }
}
