// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::io;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let installer_dir = cli.installer_dir;

    match cli.command {
        Commands::AddDep { package, tag } => {
            commands::cmd_add_dep(&installer_dir, &package, tag.as_deref())
        }
        Commands::DownloadDeps { diff } => {
            let diff = diff.as_ref().map(|pair| (pair[0].as_str(), pair[1].as_str()));
            commands::cmd_download_deps(&installer_dir, diff)
        }
        Commands::BuildInstaller {
            no_download,
            defines,
        } => commands::cmd_build_installer(&installer_dir, no_download, &defines),
        Commands::BuildUpgrade {
            from_ver,
            to_ver,
            defines,
        } => commands::cmd_build_upgrade(&installer_dir, &from_ver, to_ver.as_deref(), &defines),
        Commands::SnapshotUpgrade { from_ver, to_ver } => {
            commands::cmd_snapshot_upgrade(&installer_dir, &from_ver, &to_ver)
        }
        Commands::SetVersion { version } => commands::cmd_set_version(&installer_dir, &version),
        Commands::CleanRegistry => commands::cmd_clean_registry(&installer_dir),
        Commands::MakeZipapp => commands::cmd_make_zipapp(&installer_dir),
        Commands::RunZipapp => commands::cmd_run_zipapp(&installer_dir),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "packsmith", &mut io::stdout());
            Ok(())
        }
    }
}
