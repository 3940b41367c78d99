//! Fatal error conditions and their mapping to process exit codes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exitcode;

/// Every fatal condition the tool can hit. Each run performs one unit of
/// work, so there is no layered wrapping: errors surface directly at the
/// point of occurrence and are mapped to an exit code at one place in main.
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("{0}")]
    Usage(String),

    #[error("Source file not found [{}]", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Couldn't create destination directory [{}]", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path resolution failed [{}]", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Destination file already exists [{}] Use -o to overwrite", .0.display())]
    DestinationExists(PathBuf),

    #[error("Copy failed with an I/O error")]
    CopyIo(#[source] io::Error),

    #[error("Copy failed: {0}")]
    Internal(String),
}

/// Result type for all copy operations.
pub type CopyResult<T> = Result<T, CopyError>;

impl CopyError {
    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CopyError::Usage(_) => exitcode::USAGE,
            CopyError::SourceNotFound(_) => exitcode::SOURCE_NOT_FOUND,
            CopyError::CreateDir { .. } => exitcode::CREATE_DIR,
            CopyError::DestinationExists(_) => exitcode::DEST_EXISTS,
            CopyError::CopyIo(_) => exitcode::COPY_IO,
            CopyError::PathResolution { .. } | CopyError::Internal(_) => exitcode::COPY_FAILED,
        }
    }
}
