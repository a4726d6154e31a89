//! Attribute queries: `is_directory` and `exists`.

use tracing::trace;

use super::WideFs;
use crate::errors::Result;
use crate::maperr;
use crate::platform;
use crate::win32::FILE_ATTRIBUTE_DIRECTORY;

impl WideFs {
    /// True when `path` carries the directory attribute. A missing path is an error.
    pub fn is_directory(&self, path: &str) -> Result<bool> {
        const OP: &str = "is_directory";
        let wide = self.path_to_wide(OP, path)?;
        let attrs = platform::get_file_attributes(&wide).map_err(|code| maperr::platform(OP, Some(path), code))?;
        Ok(attrs & FILE_ATTRIBUTE_DIRECTORY != 0)
    }

    /// `Ok(false)` only when the OS reports the file or its path as missing;
    /// any other failure (access denied, bad name, ...) is returned as an error.
    pub fn exists(&self, path: &str) -> Result<bool> {
        const OP: &str = "file_exists";
        let wide = self.path_to_wide(OP, path)?;
        match platform::get_file_attributes(&wide) {
            Ok(_) => Ok(true),
            Err(code) if maperr::is_not_found_code(code) => {
                trace!(path, code, "not found");
                Ok(false)
            }
            Err(code) => Err(maperr::platform(OP, Some(path), code)),
        }
    }
}
