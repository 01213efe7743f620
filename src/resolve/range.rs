// src/resolve/range.rs

//! Version-range resolution over the tag-annotated manifest.

use crate::error::Result;
use crate::manifest::{TaggedManifest, BASE_TAG};
use crate::version::ReleaseTag;
use std::collections::BTreeSet;
use tracing::warn;

/// Resolve the package set introduced in the half-open range `(from, to]`.
///
/// With `from = None` the full set is returned: every specifier under every
/// tag, including the ungated "base" group. Otherwise a tag's packages are
/// included when the tag is strictly greater than `from` and at most `to` —
/// a dependency introduced exactly at `from` ships with the installed
/// release and is excluded, one introduced exactly at `to` is part of the
/// upgrade.
///
/// Endpoints that fail to parse are a hard error, so an `Ok` empty set
/// always means there is genuinely nothing in range. Tags that fail to
/// parse are skipped with a warning; a typo in one marker must not abort
/// the whole resolution.
pub fn resolve_range(
    manifest: &TaggedManifest,
    from: Option<&str>,
    to: &str,
) -> Result<BTreeSet<String>> {
    let mut selected = BTreeSet::new();

    let Some(from) = from else {
        for (_, specifiers) in manifest.groups() {
            selected.extend(specifiers.iter().cloned());
        }
        return Ok(selected);
    };

    let from = ReleaseTag::parse(from)?;
    let to = ReleaseTag::parse(to)?;

    for (tag, specifiers) in manifest.groups() {
        if tag == BASE_TAG {
            continue;
        }
        let version = match ReleaseTag::parse(tag) {
            Ok(version) => version,
            Err(err) => {
                warn!("skipping unparseable version tag '{}': {}", tag, err);
                continue;
            }
        };
        if version > from && version <= to {
            selected.extend(specifiers.iter().cloned());
        }
    }

    Ok(selected)
}
