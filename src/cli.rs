// src/cli.rs

//! CLI definitions for the packsmith build tool
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packsmith")]
#[command(author = "Packsmith Project")]
#[command(version)]
#[command(about = "Installer build tools for the desktop application", long_about = None)]
pub struct Cli {
    /// Installer working directory (manifests, scripts, bundles)
    #[arg(long, global = true, default_value = "installer")]
    pub installer_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a dependency to the tagged requirements manifest
    AddDep {
        /// Package specifier (e.g. "pandas>=1.5")
        package: String,

        /// Version tag to add under (default: configured current version)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Download dependencies: the full set, or only a version-range diff
    DownloadDeps {
        /// Download only the diff between two versions
        #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
        diff: Option<Vec<String>>,
    },

    /// Build the full installer
    BuildInstaller {
        /// Skip downloading dependencies first
        #[arg(long)]
        no_download: bool,

        /// Extra makensis defines as KEY=VALUE
        #[arg(long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
        defines: Vec<(String, String)>,
    },

    /// Build a differential upgrade package from the tagged manifest
    BuildUpgrade {
        /// Version to upgrade from
        #[arg(long)]
        from_ver: String,

        /// Version to upgrade to (default: configured current version)
        #[arg(long)]
        to_ver: Option<String>,

        /// Extra makensis defines as KEY=VALUE
        #[arg(long = "define", value_name = "KEY=VALUE", value_parser = parse_define)]
        defines: Vec<(String, String)>,
    },

    /// Build a differential upgrade bundle from two frozen snapshot manifests
    SnapshotUpgrade {
        /// Version to upgrade from (reads requirements_<FROM>.txt)
        from_ver: String,

        /// Version to upgrade to (reads requirements_<TO>.txt)
        to_ver: String,
    },

    /// Update the project version in the build configuration
    SetVersion {
        /// New version string (dotted numeric, e.g. "1.10")
        version: String,
    },

    /// Clean the product's registry keys (Windows only)
    CleanRegistry,

    /// Create the smoke-test zipapp
    MakeZipapp,

    /// Run the smoke-test zipapp
    RunZipapp,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn parse_define(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}
