//! The one-shot `scan` command.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use dongle_search::PathCache;

use crate::utils::ScanTarget;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Root directory to scan (defaults to the resolved project root)
    pub root: Option<PathBuf>,

    /// Scan the workspace roots configured in DONGLE_WORKSPACE
    #[arg(long)]
    pub workspace: bool,
}

/// Walks the tree, repopulates the cache and reports the count on stderr.
pub fn run(args: ScanArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let target = ScanTarget::resolve(args.root.as_deref(), &cwd, args.workspace)?;

    let cache = PathCache::new();
    cache.invalidate();

    eprintln!("Scanning {}...", target.base_root().display());
    let paths = target.scan()?;
    cache.save(&target.cache_key(), &paths);
    eprintln!("Cached {} paths", paths.len());

    Ok(ExitCode::SUCCESS)
}
