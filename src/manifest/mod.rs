// src/manifest/mod.rs

//! Dependency manifest parsing.
//!
//! Two manifest conventions exist side by side:
//!
//! - A single cumulative requirements file annotated with inline version-tag
//!   markers ("# v 1.8"), parsed into a [`TaggedManifest`]. Authored by hand
//!   and parsed permissively.
//! - One frozen requirements file per release with no tag structure, parsed
//!   into a [`SnapshotManifest`]. Produced by tooling; a missing file is a
//!   setup mistake and fails hard.

mod snapshot;
mod tagged;

pub use snapshot::SnapshotManifest;
pub use tagged::{add_specifier, TaggedManifest, BASE_TAG};
