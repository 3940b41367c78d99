//! Process exit codes, one per fatal condition

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 1;

/// Source file does not exist
pub const SOURCE_NOT_FOUND: i32 = 2;

/// A destination directory could not be created
pub const CREATE_DIR: i32 = 3;

/// Destination file exists and overwrite was not requested
pub const DEST_EXISTS: i32 = 4;

/// Copy failed with an I/O-category error
pub const COPY_IO: i32 = 5;

/// Copy failed with any other error
pub const COPY_FAILED: i32 = 6;
