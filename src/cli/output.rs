//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically. Color is
//! cosmetic only and never affects exit semantics.

use std::fmt::Display;
use std::io::Write;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green) to stdout
pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().green());
}

/// Print failure status (red) to stdout, for the result word of the
/// progress block
pub fn failure(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().red());
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color)
pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

/// Print a label without newline, so a status word can follow on the
/// same line
pub fn prompt(msg: &(impl Display + ?Sized)) {
    print!("{}", msg);
    std::io::stdout().flush().ok();
}

/// Print a debug trace line (cyan, "DEBUG:" prefix) to stdout
pub fn debug_line(msg: &(impl Display + ?Sized)) {
    println!("{}", format!("DEBUG: {}", msg).cyan());
}

/// Per-run reporting handle. Core pipeline code talks to this instead of
/// printing directly, so path and validation logic stays testable.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    debug: bool,
}

impl Reporter {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Emit a debug trace line, only when debug mode is on.
    pub fn debug(&self, msg: &(impl Display + ?Sized)) {
        if self.debug {
            debug_line(msg);
        }
    }
}
