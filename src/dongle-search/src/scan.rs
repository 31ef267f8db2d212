//! Depth- and count-bounded directory walks.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::entry::CandidateEntry;
use crate::error::{ScanError, ScanResult};
use crate::ignore_spec::IgnoreSpec;

/// Walks a single root and collects candidate directories.
///
/// The root itself is emitted first as `"."`. Traversal is depth-first in
/// directory read order; candidates stop accumulating once
/// `config.max_entries` is reached. Deny-listed, hidden and ignore-matched
/// directories are pruned before recursion, and unreadable directories are
/// skipped without failing the scan.
pub fn scan_root(
    root: &Path,
    config: &ScanConfig,
    ignore: Option<&IgnoreSpec>,
) -> ScanResult<Vec<CandidateEntry>> {
    let root = resolve_root(root)?;

    let mut paths = vec![CandidateEntry::local(".")];
    walk(&root, &root, 1, config, ignore, &mut paths, &|relative, _| {
        CandidateEntry::local(relative)
    });

    Ok(paths)
}

/// Walks an ordered set of workspace roots.
///
/// Each root is scanned to the (shallower) workspace depth and every emitted
/// entry is prefixed with the owning root's basename. No `"."` entry is
/// emitted; there is no single root to represent. Roots that cannot be
/// resolved are skipped.
pub fn scan_workspace(roots: &[PathBuf], config: &ScanConfig) -> Vec<CandidateEntry> {
    let mut paths: Vec<CandidateEntry> = Vec::new();

    for root in roots {
        let root = match resolve_root(root) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::debug!("skipping workspace root: {err}");
                continue;
            }
        };

        let basename = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        if paths.len() >= config.max_entries {
            break;
        }

        let ignore = IgnoreSpec::load(&root);
        walk(
            &root,
            &root,
            1,
            config,
            ignore.as_ref(),
            &mut paths,
            &|relative, root| {
                CandidateEntry::workspace(format!("{basename}/{relative}"), root.join(relative))
            },
        );
    }

    paths
}

/// Canonicalizes and validates a scan root.
fn resolve_root(root: &Path) -> ScanResult<PathBuf> {
    if !root.exists() {
        return Err(ScanError::root_not_found(root));
    }
    let resolved = root
        .canonicalize()
        .map_err(|source| ScanError::resolve(root, source))?;
    if !resolved.is_dir() {
        return Err(ScanError::not_a_directory(resolved));
    }
    Ok(resolved)
}

/// Recursive walk appending candidates built by `make(relative, root)`.
///
/// The entry cap is checked against the shared candidate list: once it is
/// hit, the directory currently being read is still drained but nothing
/// further is appended and no deeper recursion happens.
fn walk(
    root: &Path,
    current: &Path,
    depth: usize,
    config: &ScanConfig,
    ignore: Option<&IgnoreSpec>,
    paths: &mut Vec<CandidateEntry>,
    make: &dyn Fn(&str, &Path) -> CandidateEntry,
) {
    if depth > config.max_depth || paths.len() >= config.max_entries {
        return;
    }

    let entries = match fs::read_dir(current) {
        Ok(entries) => entries,
        Err(err) => {
            // Unreadable subtree: yields zero candidates, never an error.
            tracing::debug!("cannot read {}: {err}", current.display());
            return;
        }
    };

    let mut subdirs: Vec<PathBuf> = Vec::new();

    for entry in entries.flatten() {
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };
        // Symlinked directories are not followed.
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if config.should_skip_dir(&name) {
            continue;
        }

        let path = entry.path();
        let relative = match path.strip_prefix(root) {
            Ok(relative) => relative.to_string_lossy().into_owned(),
            Err(_) => continue,
        };

        if let Some(spec) = ignore {
            // Directories are tested with a trailing slash semantic.
            if spec.is_ignored(&relative) {
                continue;
            }
        }

        if paths.len() < config.max_entries {
            paths.push(make(&relative, root));
            subdirs.push(path);
        }
    }

    for subdir in subdirs {
        walk(root, &subdir, depth + 1, config, ignore, paths, make);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    fn display_paths(entries: &[CandidateEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.display_text().to_string())
            .collect()
    }

    #[test]
    fn test_root_is_emitted_first() {
        let tmp = TempDir::new().unwrap();
        mkdirs(tmp.path(), &["src"]);

        let paths = scan_root(tmp.path(), &ScanConfig::default(), None).unwrap();
        assert_eq!(paths[0], CandidateEntry::local("."));
    }

    #[test]
    fn test_deny_list_and_hidden_never_appear() {
        let tmp = TempDir::new().unwrap();
        mkdirs(
            tmp.path(),
            &["src", "node_modules/pkg", ".git/objects", ".hidden", "src/.cache"],
        );

        let paths = scan_root(tmp.path(), &ScanConfig::default(), None).unwrap();
        let display = display_paths(&paths);

        assert!(display.contains(&"src".to_string()));
        for path in &display {
            assert!(!path.contains("node_modules"), "{path}");
            assert!(!path.contains(".git"), "{path}");
            assert!(!path.contains(".hidden"), "{path}");
            assert!(!path.contains(".cache"), "{path}");
        }
    }

    #[test]
    fn test_max_depth_is_honored() {
        let tmp = TempDir::new().unwrap();
        mkdirs(tmp.path(), &["a/b/c/d"]);

        let config = ScanConfig {
            max_depth: 2,
            ..ScanConfig::default()
        };
        let paths = scan_root(tmp.path(), &config, None).unwrap();
        let display = display_paths(&paths);

        assert!(display.contains(&"a".to_string()));
        assert!(display.contains(&"a/b".to_string()));
        assert!(!display.contains(&"a/b/c".to_string()));
    }

    #[test]
    fn test_max_entries_caps_output() {
        let tmp = TempDir::new().unwrap();
        for i in 0..20 {
            fs::create_dir(tmp.path().join(format!("dir{i:02}"))).unwrap();
        }

        let config = ScanConfig {
            max_entries: 5,
            ..ScanConfig::default()
        };
        let paths = scan_root(tmp.path(), &config, None).unwrap();

        // Cap counts the "." entry too.
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn test_ignore_spec_prunes_subtree() {
        let tmp = TempDir::new().unwrap();
        mkdirs(tmp.path(), &["src", "generated/deep"]);
        fs::write(tmp.path().join(".gitignore"), "generated/\n").unwrap();

        let ignore = IgnoreSpec::load(tmp.path());
        let paths = scan_root(tmp.path(), &ScanConfig::default(), ignore.as_ref()).unwrap();
        let display = display_paths(&paths);

        assert!(display.contains(&"src".to_string()));
        assert!(!display.iter().any(|p| p.starts_with("generated")));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = scan_root(Path::new("/definitely/not/here"), &ScanConfig::default(), None)
            .unwrap_err();
        assert!(matches!(err, ScanError::RootNotFound(_)));
    }

    #[test]
    fn test_workspace_prefixes_and_skips_dot() {
        let tmp = TempDir::new().unwrap();
        let api = tmp.path().join("api");
        let web = tmp.path().join("web");
        mkdirs(&api, &["src"]);
        mkdirs(&web, &["src"]);

        let paths = scan_workspace(&[api.clone(), web.clone()], &ScanConfig::for_workspace());
        let display = display_paths(&paths);

        assert!(display.contains(&"api/src".to_string()));
        assert!(display.contains(&"web/src".to_string()));
        assert!(!display.contains(&".".to_string()));

        let absolute: Vec<_> = paths
            .iter()
            .map(|e| e.absolute_path(Path::new("/unused")))
            .collect();
        assert!(absolute.contains(&api.canonicalize().unwrap().join("src")));
    }

    #[test]
    fn test_workspace_missing_root_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let api = tmp.path().join("api");
        mkdirs(&api, &["src"]);

        let roots = vec![PathBuf::from("/gone"), api];
        let paths = scan_workspace(&roots, &ScanConfig::for_workspace());
        assert!(display_paths(&paths).contains(&"api/src".to_string()));
    }
}
