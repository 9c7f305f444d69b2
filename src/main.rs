//! Burn - AWS credential reconnaissance for authorized engagements.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use burn::cli::{execute, hint_for, output, Cli};
use burn::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("burn=debug")
        } else {
            EnvFilter::new("burn=warn")
        }
    });

    // stdout carries gathered data, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        if let Some(hint) = hint_for(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
