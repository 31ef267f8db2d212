//! Gitignore-style exclusion rules loaded from the scan root.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// File names consulted for ignore rules, in application order.
/// Later files add exclusions; they never override earlier ones.
const IGNORE_FILES: &[&str] = &[".gitignore", ".dongleignore"];

/// Compiled ignore rules scoped to exactly one scan root.
///
/// Absence of ignore files, or a failure to compile them, never stops a
/// scan; callers simply proceed without filtering.
#[derive(Debug)]
pub struct IgnoreSpec {
    matcher: Gitignore,
}

impl IgnoreSpec {
    /// Loads and compiles the root's ignore files.
    ///
    /// Returns `None` when no ignore file exists at the root or when the
    /// matcher cannot be built.
    pub fn load(root: &Path) -> Option<Self> {
        let mut builder = GitignoreBuilder::new(root);
        let mut found_any = false;

        for name in IGNORE_FILES {
            let path = root.join(name);
            if !path.is_file() {
                continue;
            }
            found_any = true;
            // add() reports a parse error but keeps the valid lines.
            if let Some(err) = builder.add(&path) {
                tracing::debug!("ignoring malformed pattern in {}: {err}", path.display());
            }
        }

        if !found_any {
            return None;
        }

        match builder.build() {
            Ok(matcher) => Some(Self { matcher }),
            Err(err) => {
                tracing::debug!("failed to compile ignore rules: {err}");
                None
            }
        }
    }

    /// Tests whether a directory (given relative to the root) is excluded.
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.matcher
            .matched_path_or_any_parents(relative, true)
            .is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_ignore_files_yields_none() {
        let tmp = TempDir::new().unwrap();
        assert!(IgnoreSpec::load(tmp.path()).is_none());
    }

    #[test]
    fn test_gitignore_excludes_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".gitignore"), "logs/\n").unwrap();

        let spec = IgnoreSpec::load(tmp.path()).unwrap();
        assert!(spec.is_ignored("logs"));
        assert!(!spec.is_ignored("src"));
    }

    #[test]
    fn test_dongleignore_adds_to_gitignore() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".gitignore"), "logs/\n").unwrap();
        fs::write(tmp.path().join(".dongleignore"), "scratch/\n").unwrap();

        let spec = IgnoreSpec::load(tmp.path()).unwrap();
        assert!(spec.is_ignored("logs"));
        assert!(spec.is_ignored("scratch"));
    }

    #[test]
    fn test_dongleignore_alone_is_enough() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".dongleignore"), "scratch/\n").unwrap();

        let spec = IgnoreSpec::load(tmp.path()).unwrap();
        assert!(spec.is_ignored("scratch"));
    }

    #[test]
    fn test_nested_path_matches_parent_rule() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".gitignore"), "generated/\n").unwrap();

        let spec = IgnoreSpec::load(tmp.path()).unwrap();
        assert!(spec.is_ignored("generated/deep/tree"));
    }
}
