//! Directory enumeration with native wildcard patterns (`dir/*.txt`).
//!
//! End of sequence is `Ok(None)`, never an error.

use tracing::{trace, warn};

use super::{SearchHandle, WideFs};
use crate::errors::Result;
use crate::maperr;
use crate::platform::{self, FindData};
use crate::win32::{ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_FILES};

impl WideFs {
    /// Start a search. Returns the first matching name and the handle to pass
    /// to [`find_next`](Self::find_next), or `None` when nothing matches.
    pub fn find_first(&self, pattern: &str) -> Result<Option<(String, SearchHandle)>> {
        const OP: &str = "opendir";
        let wide = self.path_to_wide(OP, pattern)?;
        let mut data = FindData::new();
        let raw = match platform::find_first(&wide, &mut data) {
            Ok(raw) => raw,
            Err(ERROR_FILE_NOT_FOUND | ERROR_NO_MORE_FILES) => {
                trace!(pattern, "no matching entries");
                return Ok(None);
            }
            Err(code) => return Err(maperr::platform(OP, Some(pattern), code)),
        };
        match self.name_to_utf8(OP, Some(pattern), data.file_name()) {
            Ok(name) => Ok(Some((name, SearchHandle::new(raw)))),
            Err(err) => {
                // The caller never sees this handle, so it must not outlive the call.
                if let Err(code) = platform::find_close(raw) {
                    warn!(pattern, code, "failed to close search handle");
                }
                Err(err)
            }
        }
    }

    /// Next name from an open search, or `None` once it is exhausted.
    /// The handle stays open either way.
    pub fn find_next(&self, search: &mut SearchHandle) -> Result<Option<String>> {
        const OP: &str = "readdir";
        let mut data = FindData::new();
        match platform::find_next(search.raw_mut(), &mut data) {
            Ok(()) => {}
            Err(ERROR_NO_MORE_FILES) => return Ok(None),
            Err(code) => return Err(maperr::platform(OP, None, code)),
        }
        self.name_to_utf8(OP, None, data.file_name()).map(Some)
    }
}
