//! CLI layer: argument scanning, run driver, terminal reporting

pub mod args;
pub mod commands;
pub mod output;

pub use args::Config;
