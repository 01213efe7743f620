// src/commands/zipapp.rs

//! Smoke-test zipapp commands.

use anyhow::Result;
use packsmith::archive;
use packsmith::config::BuildConfig;
use std::path::Path;
use tracing::info;

/// Source directory of the smoke-test application
const ZIPAPP_SOURCE: &str = "test_zipapp";

/// Output archive name
const ZIPAPP_OUTPUT: &str = "test_zipapp.pyz";

/// Build the smoke-test zipapp from the installer directory
pub fn cmd_make_zipapp(installer_dir: &Path) -> Result<()> {
    let source = installer_dir.join(ZIPAPP_SOURCE);
    let output = installer_dir.join(ZIPAPP_OUTPUT);
    info!(
        "creating zipapp from {} to {}",
        source.display(),
        output.display()
    );
    archive::make_zipapp(&source, &output)?;
    Ok(())
}

/// Run the smoke-test zipapp with the configured interpreter
pub fn cmd_run_zipapp(installer_dir: &Path) -> Result<()> {
    let config = BuildConfig::load(installer_dir)?;
    archive::run_zipapp(&config.python, &installer_dir.join(ZIPAPP_OUTPUT))?;
    Ok(())
}
