// src/config.rs

//! Build configuration for the installer working directory.
//!
//! Stored as `config.toml` inside the installer directory. Every field has
//! a default so a fresh checkout works without any configuration file; the
//! file is written back in full by `save`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name inside the installer directory
pub const CONFIG_FILE: &str = "config.toml";

/// Build configuration for one product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    /// Current product version, used as the default upgrade target
    #[serde(default = "default_version")]
    pub version: String,

    /// Product name as registered by the installer
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Tag-annotated requirements manifest, relative to the installer dir
    #[serde(default = "default_requirements_file")]
    pub requirements_file: String,

    /// Main NSIS installer script, relative to the installer dir
    #[serde(default = "default_nsis_script")]
    pub nsis_script: String,

    /// Python interpreter used to drive pip and run the zipapp
    #[serde(default = "default_python")]
    pub python: String,

    /// Package index the download tool fetches from
    #[serde(default = "default_index_url")]
    pub index_url: String,
}

fn default_version() -> String {
    "1.9".to_string()
}

fn default_product_name() -> String {
    "Atlas Workbench".to_string()
}

fn default_requirements_file() -> String {
    "requirements.txt".to_string()
}

fn default_nsis_script() -> String {
    "installer.nsi".to_string()
}

fn default_python() -> String {
    "python".to_string()
}

fn default_index_url() -> String {
    "https://pypi.org/simple".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            product_name: default_product_name(),
            requirements_file: default_requirements_file(),
            nsis_script: default_nsis_script(),
            python: default_python(),
            index_url: default_index_url(),
        }
    }
}

impl BuildConfig {
    /// Path of the configuration file inside an installer directory
    pub fn path(installer_dir: &Path) -> PathBuf {
        installer_dir.join(CONFIG_FILE)
    }

    /// Load the configuration, falling back to defaults when absent
    pub fn load(installer_dir: &Path) -> Result<Self> {
        let path = Self::path(installer_dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    /// Write the configuration back to the installer directory
    pub fn save(&self, installer_dir: &Path) -> Result<()> {
        fs::create_dir_all(installer_dir)?;
        fs::write(Self::path(installer_dir), toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
