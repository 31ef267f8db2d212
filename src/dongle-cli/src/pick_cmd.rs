//! The interactive `pick` command.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Args;
use dongle_search::PathCache;
use dongle_tui::{PickerEvent, PickerSession, run_picker};
use dongle_update::{CURRENT_VERSION, check_for_update};

use crate::utils::ScanTarget;

#[derive(Debug, Args)]
pub struct PickArgs {
    /// Root directory to search (defaults to the resolved project root)
    pub root: Option<PathBuf>,

    /// Delete the cache record and force a fresh scan
    #[arg(long)]
    pub rescan: bool,

    /// Search the workspace roots configured in DONGLE_WORKSPACE
    #[arg(long)]
    pub workspace: bool,
}

/// Runs the picker and prints the chosen absolute path on stdout.
///
/// Exit code 0 carries a selection; any cancellation or empty accept exits
/// non-zero with no stdout payload, so `cd "$(dongle pick)"` degrades
/// safely in shell integration.
pub async fn run(args: PickArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let target = ScanTarget::resolve(args.root.as_deref(), &cwd, args.workspace)?;

    let cache = PathCache::new();
    if args.rescan {
        cache.invalidate();
    }

    let key = target.cache_key();
    let cached = cache.load(&key);
    let scanning = cached.is_none();
    let candidates = cached.unwrap_or_default();

    let (tx, rx) = mpsc::channel::<PickerEvent>();

    if scanning {
        spawn_scan(target.clone(), cache, key, tx.clone());
    }
    spawn_update_check(tx);

    let session = PickerSession::new(target.base_root(), &cwd, candidates, scanning);
    let chosen = tokio::task::spawn_blocking(move || run_picker(session, rx))
        .await
        .context("picker task panicked")??;

    match chosen {
        Some(entry) => {
            println!("{}", entry.absolute_path(target.base_root()).display());
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

/// Starts the background walk.
///
/// The scan is not cancelled when the session ends early: it finishes,
/// writes the cache for the next invocation, and its completion event is
/// simply dropped with the closed channel. A failed scan leaves the cache
/// untouched so the next invocation retries instead of serving an empty
/// record for the rest of the TTL.
fn spawn_scan(target: ScanTarget, cache: PathCache, key: String, tx: mpsc::Sender<PickerEvent>) {
    std::thread::spawn(move || {
        let paths = match target.scan() {
            Ok(paths) => {
                cache.save(&key, &paths);
                paths
            }
            Err(err) => {
                // The session continues with whatever it has.
                tracing::debug!("background scan failed: {err:#}");
                Vec::new()
            }
        };
        let _ = tx.send(PickerEvent::ScanComplete(paths));
    });
}

/// Starts the best-effort release check. Failures never produce an event.
fn spawn_update_check(tx: mpsc::Sender<PickerEvent>) {
    tokio::spawn(async move {
        if let Some(version) = check_for_update(CURRENT_VERSION).await {
            let _ = tx.send(PickerEvent::UpdateAvailable(version));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_failed_scan_does_not_populate_cache() {
        let tmp = TempDir::new().unwrap();
        let cache = PathCache::at(tmp.path().join("cache.json"));
        let target = ScanTarget::Single(PathBuf::from("/definitely/not/here"));

        let (tx, rx) = mpsc::channel();
        spawn_scan(target, cache.clone(), "key".to_string(), tx);

        match rx.recv().unwrap() {
            PickerEvent::ScanComplete(paths) => assert!(paths.is_empty()),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(cache.load("key"), None);
    }

    #[test]
    fn test_successful_scan_populates_cache() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("src")).unwrap();
        let cache = PathCache::at(tmp.path().join("cache.json"));
        let target = ScanTarget::Single(tmp.path().canonicalize().unwrap());

        let (tx, rx) = mpsc::channel();
        spawn_scan(target, cache.clone(), "key".to_string(), tx);

        match rx.recv().unwrap() {
            PickerEvent::ScanComplete(paths) => assert!(!paths.is_empty()),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(cache.load("key").is_some());
    }
}
