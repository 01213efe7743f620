// src/commands/registry.rs

//! Registry cleanup command.

use anyhow::Result;
use packsmith::config::BuildConfig;
use packsmith::platform;
use std::path::Path;

/// Delete the product's installer registry keys on the host.
///
/// Uses the native platform collaborator; on hosts without a Windows
/// registry this degrades to a logged no-op.
pub fn cmd_clean_registry(installer_dir: &Path) -> Result<()> {
    let config = BuildConfig::load(installer_dir)?;
    platform::native().clean_registry(&config.product_name)?;
    Ok(())
}
