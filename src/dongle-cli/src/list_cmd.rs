//! The `list` command.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use dongle_search::PathCache;

use crate::utils::ScanTarget;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Root directory to list (defaults to the resolved project root)
    pub root: Option<PathBuf>,

    /// List the workspace roots configured in DONGLE_WORKSPACE
    #[arg(long)]
    pub workspace: bool,
}

/// Prints cached paths one per line, scanning (and caching) on a miss.
pub fn run(args: ListArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let target = ScanTarget::resolve(args.root.as_deref(), &cwd, args.workspace)?;

    let cache = PathCache::new();
    let key = target.cache_key();

    let paths = match cache.load(&key) {
        Some(paths) => paths,
        None => {
            let paths = target.scan()?;
            cache.save(&key, &paths);
            paths
        }
    };

    for entry in &paths {
        println!("{}", entry.display_text());
    }

    Ok(ExitCode::SUCCESS)
}
