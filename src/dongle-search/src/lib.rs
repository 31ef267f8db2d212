//! Directory scanning, caching and fuzzy ranking for dongle.
//!
//! This crate implements the non-interactive half of the picker:
//!
//! - [`scan_root`] / [`scan_workspace`] walk a directory tree and collect
//!   candidate directories, bounded by depth and entry count.
//! - [`PathCache`] persists one scan result per user with TTL invalidation.
//! - [`score`] / [`rank`] implement the fuzzy subsequence matcher used for
//!   live filtering.
//! - [`resolve_project_root`] finds the default scan root by walking upward
//!   to a project marker.

pub mod cache;
pub mod config;
pub mod entry;
pub mod error;
pub mod ignore_spec;
pub mod matcher;
pub mod project_root;
pub mod scan;

pub use cache::{
    CACHE_TTL_SECS, CacheRecord, PathCache, WORKSPACE_KEY_PREFIX, cache_key, workspace_cache_key,
};
pub use config::{DEFAULT_MAX_DEPTH, ScanConfig, parse_workspace_roots, workspace_roots_from_env};
pub use entry::CandidateEntry;
pub use error::{ScanError, ScanResult};
pub use ignore_spec::IgnoreSpec;
pub use matcher::{CWD_BOOST, rank, score};
pub use project_root::resolve_project_root;
pub use scan::{scan_root, scan_workspace};

/// Environment variable holding the comma-separated workspace root list.
pub const WORKSPACE_ENV: &str = "DONGLE_WORKSPACE";

/// Environment variable holding the fallback search scope for root resolution.
pub const SEARCH_SCOPE_ENV: &str = "DONGLE_SEARCH_SCOPE";
