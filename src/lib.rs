//! mirrorcp copies a single file into a destination directory while
//! recreating the source file's full original directory path (minus its
//! root or drive marker) underneath it, so archived files from different
//! locations never collide by name.

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod mirror;
pub mod util;

pub use cli::args::Config;
pub use errors::{CopyError, CopyResult};
