use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::errors::{CopyError, CopyResult};

pub trait PathExt {
    fn to_canonical(&self) -> CopyResult<PathBuf>;
}

impl PathExt for Path {
    fn to_canonical(&self) -> CopyResult<PathBuf> {
        self.canonicalize().map_err(|e| CopyError::PathResolution {
            path: self.to_path_buf(),
            source: e,
        })
    }
}

/// Rewrite forward slashes to the platform separator. This is a textual
/// substitution, not a semantic path parse.
pub fn normalize_separators(raw: &str) -> PathBuf {
    PathBuf::from(raw.replace('/', MAIN_SEPARATOR_STR))
}
