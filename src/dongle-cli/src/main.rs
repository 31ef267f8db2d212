//! dongle - fast, fuzzy directory navigation for any terminal.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dongle_cli::{Cli, dispatch_command};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr: stdout is reserved for the picked path so
    // `cd "$(dongle pick)"` stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match dispatch_command(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("dongle: {err:#}");
            ExitCode::FAILURE
        }
    }
}
