//! Shared root resolution and scanning helpers for the commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use dongle_search::{
    CandidateEntry, IgnoreSpec, SEARCH_SCOPE_ENV, ScanConfig, scan_root, scan_workspace,
    workspace_roots_from_env,
};

/// Resolved scan target: one root or the configured workspace set.
#[derive(Debug, Clone)]
pub enum ScanTarget {
    /// Single resolved root.
    Single(PathBuf),

    /// Ordered workspace roots, plus the invoking directory used as the
    /// display and proximity base. The cache key comes from the roots.
    Workspace { roots: Vec<PathBuf>, base: PathBuf },
}

impl ScanTarget {
    /// Resolves the target for a command invocation.
    ///
    /// With `workspace` set, roots come from the environment and an empty
    /// list is a configuration error. Otherwise an explicit root argument
    /// wins, falling back to project-root resolution from `cwd`.
    pub fn resolve(root_arg: Option<&Path>, cwd: &Path, workspace: bool) -> Result<Self> {
        if workspace {
            let roots = workspace_roots_from_env();
            if roots.is_empty() {
                bail!(
                    "workspace mode requires {} to name at least one existing directory",
                    dongle_search::WORKSPACE_ENV
                );
            }
            return Ok(Self::Workspace {
                base: cwd.to_path_buf(),
                roots,
            });
        }

        let root = match root_arg {
            Some(root) => root
                .canonicalize()
                .with_context(|| format!("cannot resolve root '{}'", root.display()))?,
            None => {
                let scope = std::env::var(SEARCH_SCOPE_ENV).ok();
                dongle_search::resolve_project_root(cwd, scope.as_deref())
            }
        };

        Ok(Self::Single(root))
    }

    /// Cache key for this target. Workspace keys identify the root set, so
    /// the key is stable across invoking directories and changes with the
    /// configured roots.
    pub fn cache_key(&self) -> String {
        match self {
            Self::Single(root) => dongle_search::cache_key(root),
            Self::Workspace { roots, .. } => dongle_search::workspace_cache_key(roots),
        }
    }

    /// Root used to resolve `Local` candidates to absolute paths.
    pub fn base_root(&self) -> &Path {
        match self {
            Self::Single(root) => root,
            Self::Workspace { base, .. } => base,
        }
    }

    /// Runs the full walk for this target.
    pub fn scan(&self) -> Result<Vec<CandidateEntry>> {
        match self {
            Self::Single(root) => {
                let config = ScanConfig::for_root(root);
                let ignore = IgnoreSpec::load(root);
                Ok(scan_root(root, &config, ignore.as_ref())?)
            }
            Self::Workspace { roots, .. } => {
                Ok(scan_workspace(roots, &ScanConfig::for_workspace()))
            }
        }
    }
}
