//! Single-slot on-disk cache for scan results.
//!
//! The cache holds exactly one `(key, candidates, timestamp)` record per
//! user; writing a new key discards the previous one. It is a performance
//! optimization only: every failure mode on load is a plain miss, and save
//! failures are swallowed.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::entry::CandidateEntry;

/// Seconds a cached record stays usable.
pub const CACHE_TTL_SECS: u64 = 300;

/// Prefix distinguishing workspace keys from single-root keys.
pub const WORKSPACE_KEY_PREFIX: &str = "WORKSPACE:";

/// On-disk record format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Resolved root path, or `WORKSPACE:` + the joined root set.
    pub key: String,

    /// Candidates captured by the scan.
    pub paths: Vec<CandidateEntry>,

    /// Epoch seconds at capture time.
    pub ts: u64,
}

/// Persistent path cache at a fixed per-user location.
#[derive(Debug, Clone)]
pub struct PathCache {
    path: PathBuf,
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCache {
    /// Creates a cache at the default per-user location.
    pub fn new() -> Self {
        Self {
            path: default_cache_path(),
        }
    }

    /// Creates a cache backed by an explicit file, for tests.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the cached candidates for `key`.
    ///
    /// Returns `None` on a missing file, parse failure, key mismatch or TTL
    /// expiry; callers cannot and should not distinguish these.
    pub fn load(&self, key: &str) -> Option<Vec<CandidateEntry>> {
        self.load_at(key, epoch_secs())
    }

    /// TTL check against an injected clock; `load` passes the real time.
    pub fn load_at(&self, key: &str, now: u64) -> Option<Vec<CandidateEntry>> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let record: CacheRecord = serde_json::from_str(&content).ok()?;

        if record.key != key {
            return None;
        }
        if now.saturating_sub(record.ts) > CACHE_TTL_SECS {
            return None;
        }
        Some(record.paths)
    }

    /// Writes a record for `key`, replacing whatever was cached before.
    ///
    /// Best-effort: failures are logged at debug level and otherwise ignored.
    pub fn save(&self, key: &str, paths: &[CandidateEntry]) {
        let record = CacheRecord {
            key: key.to_string(),
            paths: paths.to_vec(),
            ts: epoch_secs(),
        };

        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(err) => {
                tracing::debug!("cache serialize failed: {err}");
                return;
            }
        };

        if let Err(err) = std::fs::write(&self.path, json) {
            tracing::debug!("cache write failed: {err}");
        }
    }

    /// Deletes the cache file, guaranteeing the next load is a miss.
    pub fn invalidate(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!("cache delete failed: {err}");
            }
        }
    }
}

/// Builds the cache key for a single resolved root.
pub fn cache_key(root: &std::path::Path) -> String {
    root.display().to_string()
}

/// Builds the cache key for a workspace root set.
///
/// The key is derived from the ordered resolved roots themselves, so a
/// changed `DONGLE_WORKSPACE` misses the old record and the same set hits
/// it from any invoking directory.
pub fn workspace_cache_key(roots: &[PathBuf]) -> String {
    let joined = roots
        .iter()
        .map(|root| root.display().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{WORKSPACE_KEY_PREFIX}{joined}")
}

fn default_cache_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dongle_cache.json")
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
