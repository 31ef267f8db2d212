//! Scan configuration and environment parsing.

use std::path::{Path, PathBuf};

/// Default maximum traversal depth for a single-root scan.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Depth used when the resolved root is the home directory or the
/// filesystem root, where a full-depth walk would be pathological.
pub const SHALLOW_MAX_DEPTH: usize = 2;

/// Depth used for each root of a workspace scan.
pub const WORKSPACE_MAX_DEPTH: usize = 3;

/// Default candidate cap for a single-root scan.
pub const DEFAULT_MAX_ENTRIES: usize = 5_000;

/// Default candidate cap across all roots of a workspace scan.
pub const WORKSPACE_MAX_ENTRIES: usize = 15_000;

/// Directory names that are never scanned or emitted, at any depth.
const SKIP_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "__pycache__",
    ".cache",
    ".npm",
    ".yarn",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "venv",
    ".venv",
    "env",
    ".env",
    ".tox",
    "target",
    "vendor",
    ".idea",
    ".vscode",
    "coverage",
    ".mypy_cache",
    ".pytest_cache",
];

/// Configuration for a directory scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum traversal depth; depth 1 is the root's immediate children.
    pub max_depth: usize,

    /// Traversal stops appending candidates once this many were collected.
    pub max_entries: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl ScanConfig {
    /// Creates a single-root configuration, shallowing the depth when the
    /// root is the user's home directory or the filesystem root.
    pub fn for_root(root: &Path) -> Self {
        let is_pathological =
            root == Path::new("/") || dirs::home_dir().is_some_and(|home| home == root);

        Self {
            max_depth: if is_pathological {
                SHALLOW_MAX_DEPTH
            } else {
                DEFAULT_MAX_DEPTH
            },
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates the configuration used for each workspace root.
    pub fn for_workspace() -> Self {
        Self {
            max_depth: WORKSPACE_MAX_DEPTH,
            max_entries: WORKSPACE_MAX_ENTRIES,
        }
    }

    /// Checks whether a directory name is pruned before recursion.
    ///
    /// Covers both the fixed deny-list and the hidden-file marker.
    pub fn should_skip_dir(&self, name: &str) -> bool {
        name.starts_with('.') || SKIP_DIRS.contains(&name)
    }
}

/// Parses a comma-separated workspace root list, expanding a leading `~`.
///
/// Empty segments and non-directories are dropped; the order of the
/// remaining roots is preserved.
pub fn parse_workspace_roots(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(expand_tilde)
        .filter(|path| path.is_dir())
        .collect()
}

/// Reads workspace roots from the environment, if configured.
pub fn workspace_roots_from_env() -> Vec<PathBuf> {
    std::env::var(crate::WORKSPACE_ENV)
        .map(|value| parse_workspace_roots(&value))
        .unwrap_or_default()
}

/// Expands a leading `~` or `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
