// src/commands/mod.rs
//! Command handlers for the packsmith CLI

mod build;
mod deps;
mod registry;
mod version;
mod zipapp;

pub use build::{cmd_build_installer, cmd_build_upgrade, cmd_snapshot_upgrade};
pub use deps::{cmd_add_dep, cmd_download_deps};
pub use registry::cmd_clean_registry;
pub use version::cmd_set_version;
pub use zipapp::{cmd_make_zipapp, cmd_run_zipapp};
