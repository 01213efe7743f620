// src/commands/version.rs

//! Project version command.

use anyhow::Result;
use packsmith::config::BuildConfig;
use packsmith::version::ReleaseTag;
use std::path::Path;
use tracing::info;

/// Update the configured project version.
///
/// The new version must parse as a dotted numeric tag; everything else in
/// the tool compares against it, so a typo here would poison later range
/// resolutions.
pub fn cmd_set_version(installer_dir: &Path, version: &str) -> Result<()> {
    ReleaseTag::parse(version)?;

    let mut config = BuildConfig::load(installer_dir)?;
    config.version = version.to_string();
    config.save(installer_dir)?;
    info!("version updated to {}", version);
    Ok(())
}
