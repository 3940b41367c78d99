//! Argument scanning and the per-run configuration.
//!
//! The scanner is hand-written: unknown options must be a non-fatal
//! warning and the remaining tokens still parsed, which a declarative
//! parser cannot express without fighting it.

use std::path::PathBuf;

use crate::cli::output;
use crate::errors::{CopyError, CopyResult};
use crate::util::path::normalize_separators;

/// Immutable per-run configuration, built once from the raw argument list
/// and passed by reference to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub dest_dir: PathBuf,
    pub overwrite: bool,
    pub debug: bool,
}

/// Scan the raw argument list (program name already stripped) into a
/// [`Config`].
///
/// Tokens are scanned from the end toward the start; anything starting
/// with `-` is treated as an option and removed from the positional list.
/// `-o`/`--overwrite` and `-d`/`--debug` set their flags, any other
/// dash-prefixed token gets a warning and is dropped. Exactly two
/// positionals must remain: source file and destination directory.
/// Forward slashes in both are rewritten to the platform separator.
pub fn parse(args: &[String]) -> CopyResult<Config> {
    if args.len() < 2 {
        return Err(CopyError::Usage(format!(
            "expected 2 arguments, got {}",
            args.len()
        )));
    }

    let mut positionals: Vec<&str> = Vec::with_capacity(args.len());
    let mut overwrite = false;
    let mut debug = false;

    for token in args.iter().rev() {
        if token.starts_with('-') {
            match token.as_str() {
                "-o" | "--overwrite" => overwrite = true,
                "-d" | "--debug" => debug = true,
                other => output::warning(&format!("Unknown option [{}]", other)),
            }
        } else {
            positionals.push(token);
        }
    }
    positionals.reverse();

    if positionals.len() != 2 {
        return Err(CopyError::Usage(format!(
            "expected 2 arguments, got {}",
            positionals.len()
        )));
    }

    Ok(Config {
        source: normalize_separators(positionals[0]),
        dest_dir: normalize_separators(positionals[1]),
        overwrite,
        debug,
    })
}

/// Print usage and option descriptions to stdout.
pub fn print_help() {
    output::info("Usage:");
    output::info("  mirrorcp <source_file> <destination_directory> [-o|--overwrite] [-d|--debug]");
    output::info("Options:");
    output::info("  -o, --overwrite   Overwrite the destination file if it exists");
    output::info("  -d, --debug       Print debug messages");
}
