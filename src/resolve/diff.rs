// src/resolve/diff.rs

//! Snapshot-diff resolution between two frozen releases.

use crate::manifest::SnapshotManifest;
use std::collections::BTreeSet;

/// Packages present in the target snapshot but not in the source snapshot.
///
/// Comparison is exact string equality on whole specifier lines. A package
/// whose version constraint changed between releases ("pkg==1.0" to
/// "pkg==2.0") therefore counts as a new specifier and appears in the diff.
/// That coarseness is deliberate: specifiers are opaque and are never parsed
/// into name and constraint.
pub fn resolve_diff(from: &SnapshotManifest, to: &SnapshotManifest) -> BTreeSet<String> {
    to.packages().difference(from.packages()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(packages: &[&str]) -> SnapshotManifest {
        packages.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_new_package_appears() {
        let from = snapshot(&["X", "Y"]);
        let to = snapshot(&["X", "Y", "Z"]);
        let diff = resolve_diff(&from, &to);
        assert_eq!(diff.iter().collect::<Vec<_>>(), vec!["Z"]);
    }

    #[test]
    fn test_removed_package_ignored() {
        let from = snapshot(&["X", "Y"]);
        let to = snapshot(&["X"]);
        assert!(resolve_diff(&from, &to).is_empty());
    }

    #[test]
    fn test_changed_constraint_is_a_new_specifier() {
        let from = snapshot(&["pkg==1.0"]);
        let to = snapshot(&["pkg==2.0"]);
        let diff = resolve_diff(&from, &to);
        assert_eq!(diff.iter().collect::<Vec<_>>(), vec!["pkg==2.0"]);
    }

    #[test]
    fn test_not_symmetric() {
        let a = snapshot(&["X", "Y"]);
        let b = snapshot(&["Y", "Z"]);
        let forward = resolve_diff(&a, &b);
        let backward = resolve_diff(&b, &a);
        assert_eq!(forward.iter().collect::<Vec<_>>(), vec!["Z"]);
        assert_eq!(backward.iter().collect::<Vec<_>>(), vec!["X"]);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_identical_snapshots_diff_empty() {
        let a = snapshot(&["X", "Y"]);
        assert!(resolve_diff(&a, &a.clone()).is_empty());
    }
}
