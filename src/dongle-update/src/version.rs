//! Version comparison.

/// Result of comparing two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComparison {
    /// Current is older than target.
    Older,
    /// Current equals target.
    Equal,
    /// Current is newer than target.
    Newer,
}

/// Compares two semver-ish version strings.
pub fn compare_versions(current: &str, target: &str) -> VersionComparison {
    let current = parse_version(current);
    let target = parse_version(target);

    match current.cmp(&target) {
        std::cmp::Ordering::Less => VersionComparison::Older,
        std::cmp::Ordering::Equal => VersionComparison::Equal,
        std::cmp::Ordering::Greater => VersionComparison::Newer,
    }
}

/// Parses a version string into comparable parts.
fn parse_version(version: &str) -> (u32, u32, u32) {
    let version = version.strip_prefix('v').unwrap_or(version);
    let version = version.split_once('-').map_or(version, |(v, _)| v);

    let parts: Vec<u32> = version
        .split('.')
        .take(3)
        .filter_map(|s| s.parse().ok())
        .collect();

    (
        parts.first().copied().unwrap_or(0),
        parts.get(1).copied().unwrap_or(0),
        parts.get(2).copied().unwrap_or(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_versions() {
        assert_eq!(compare_versions("0.1.0", "0.2.0"), VersionComparison::Older);
        assert_eq!(compare_versions("0.2.0", "0.2.0"), VersionComparison::Equal);
        assert_eq!(compare_versions("0.3.0", "0.2.0"), VersionComparison::Newer);
        assert_eq!(compare_versions("1.0.0", "0.9.9"), VersionComparison::Newer);
    }

    #[test]
    fn test_compare_versions_with_prefix() {
        assert_eq!(
            compare_versions("v0.1.0", "0.2.0"),
            VersionComparison::Older
        );
        assert_eq!(
            compare_versions("0.1.0", "v0.2.0"),
            VersionComparison::Older
        );
    }

    #[test]
    fn test_prerelease_suffix_is_ignored() {
        assert_eq!(
            compare_versions("0.2.0-alpha.1", "0.2.0"),
            VersionComparison::Equal
        );
    }
}
