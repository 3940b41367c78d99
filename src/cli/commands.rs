//! Drives one copy run: resolve the plan, print the progress block,
//! perform the copy, report the outcome.

use std::error::Error as _;

use tracing::{debug, instrument};

use crate::cli::args::Config;
use crate::cli::output::{self, Reporter};
use crate::errors::{CopyError, CopyResult};
use crate::mirror;

/// Execute a single copy run. All user-facing reporting happens here and
/// in the pipeline's debug trace; the caller only maps the returned error
/// to an exit code.
#[instrument(level = "debug")]
pub fn run(config: &Config) -> CopyResult<()> {
    let report = Reporter::new(config.debug);

    let plan = match mirror::plan(config, &report) {
        Ok(plan) => plan,
        Err(err) => {
            output::error(&err);
            return Err(with_cause_trace(&report, err));
        }
    };

    output::info("Copying...");
    output::info(&format!("SrcFile: {}", plan.source.display()));
    output::info(&format!("DstFile: {}", plan.dest_file.display()));
    output::prompt("Result : ");

    match mirror::copy(&plan, config.overwrite) {
        Ok(bytes) => {
            output::success("OK");
            debug!(bytes, "copy complete");
            Ok(())
        }
        Err(err) => {
            let status = match err {
                CopyError::CopyIo(_) => "[I/O ERROR]",
                _ => "[ERROR]",
            };
            output::failure(status);
            Err(with_cause_trace(&report, err))
        }
    }
}

/// Surface the OS-level cause, debug mode only.
fn with_cause_trace(report: &Reporter, err: CopyError) -> CopyError {
    if let Some(cause) = err.source() {
        report.debug(&cause.to_string());
    }
    err
}
