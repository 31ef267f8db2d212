//! Candidate entry model shared by the scanner, matcher and picker.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One directory candidate produced by a scan.
///
/// Single-root scans emit [`CandidateEntry::Local`] paths relative to the
/// scan root (with `"."` standing for the root itself). Workspace scans emit
/// [`CandidateEntry::Workspace`] pairs where the display path is prefixed
/// with the owning root's basename, disambiguating identically named
/// subdirectories across roots, while the absolute path stays authoritative
/// for the final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateEntry {
    /// Path relative to a single scan root.
    Local(String),

    /// Workspace candidate: `<root_basename>/<relative>` plus absolute path.
    Workspace {
        display: String,
        absolute: PathBuf,
    },
}

impl CandidateEntry {
    /// Creates a local candidate from a relative path.
    pub fn local(relative: impl Into<String>) -> Self {
        Self::Local(relative.into())
    }

    /// Creates a workspace candidate.
    pub fn workspace(display: impl Into<String>, absolute: impl Into<PathBuf>) -> Self {
        Self::Workspace {
            display: display.into(),
            absolute: absolute.into(),
        }
    }

    /// Text the matcher scores and the picker renders.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Local(relative) => relative,
            Self::Workspace { display, .. } => display,
        }
    }

    /// Resolves this candidate to an absolute path under `root`.
    ///
    /// Workspace candidates carry their absolute path and ignore `root`.
    /// A local `"."` resolves to the root itself.
    pub fn absolute_path(&self, root: &Path) -> PathBuf {
        match self {
            Self::Local(relative) if relative == "." => root.to_path_buf(),
            Self::Local(relative) => root.join(relative),
            Self::Workspace { absolute, .. } => absolute.clone(),
        }
    }
}
