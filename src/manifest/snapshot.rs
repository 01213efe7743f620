// src/manifest/snapshot.rs

//! Frozen per-release requirements snapshot.
//!
//! A snapshot is the complete dependency closure of one release, one
//! specifier per line, with no tag structure. Unlike the tagged manifest a
//! missing snapshot file is a hard error: snapshots are produced per release
//! and comparing against one that does not exist indicates a setup mistake.

use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// The dependency set of one frozen release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotManifest {
    packages: BTreeSet<String>,
}

impl SnapshotManifest {
    /// Parse snapshot text: blank and comment lines are ignored, every
    /// other line is a package specifier compared by exact string equality.
    pub fn parse(text: &str) -> Self {
        let packages = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { packages }
    }

    /// Load a snapshot file, failing if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MissingManifest(path.to_path_buf()));
        }
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    pub fn packages(&self) -> &BTreeSet<String> {
        &self.packages
    }

    pub fn contains(&self, specifier: &str) -> bool {
        self.packages.contains(specifier)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<String> for SnapshotManifest {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}
