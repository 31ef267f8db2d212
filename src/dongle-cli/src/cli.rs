//! Command-line argument structures and dispatch.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::init_cmd::{self, InitArgs};
use crate::list_cmd::{self, ListArgs};
use crate::pick_cmd::{self, PickArgs};
use crate::scan_cmd::{self, ScanArgs};

/// dongle - fast, fuzzy directory navigation for any terminal.
#[derive(Debug, Parser)]
#[command(name = "dongle")]
#[command(author, version)]
#[command(about = "Fast, fuzzy directory navigation for any terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactively pick a directory and print its absolute path
    Pick(PickArgs),

    /// Scan a directory tree and populate the path cache
    Scan(ScanArgs),

    /// Print cached (or freshly scanned) paths, one per line
    List(ListArgs),

    /// Print shell integration for bash, zsh or fish
    Init(InitArgs),
}

/// Runs the parsed command, returning the process exit code.
pub async fn dispatch_command(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Pick(args) => pick_cmd::run(args).await,
        Commands::Scan(args) => scan_cmd::run(args),
        Commands::List(args) => list_cmd::run(args),
        Commands::Init(args) => init_cmd::run(args),
    }
}
