use std::{env, process};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use mirrorcp::cli::{args, commands, output};
use mirrorcp::exitcode;

fn main() {
    process::exit(run());
}

/// The single point where a run outcome becomes a process exit code.
fn run() -> i32 {
    output::header(&format!(
        "\nmirrorcp v{} by {}. Copies a file recreating its full source path under the destination directory.",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
    ));

    let raw_args: Vec<String> = env::args().skip(1).collect();
    let config = match args::parse(&raw_args) {
        Ok(config) => config,
        Err(err) => {
            args::print_help();
            return err.exit_code();
        }
    };

    setup_logging(config.debug);

    match commands::run(&config) {
        Ok(()) => exitcode::OK,
        Err(err) => err.exit_code(),
    }
}

fn setup_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
