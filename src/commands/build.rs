// src/commands/build.rs

//! Installer and upgrade-package build commands.

use anyhow::Result;
use packsmith::bundle::{self, BundleAssembler};
use packsmith::config::BuildConfig;
use packsmith::manifest::{SnapshotManifest, TaggedManifest};
use packsmith::nsis;
use packsmith::resolve::{resolve_diff, resolve_range};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Build the full installer: fetch the complete dependency set (unless
/// skipped) and compile the configured NSIS script.
pub fn cmd_build_installer(
    installer_dir: &Path,
    no_download: bool,
    defines: &[(String, String)],
) -> Result<()> {
    let config = BuildConfig::load(installer_dir)?;

    if !no_download {
        let assembler = BundleAssembler::new(&config.python, &config.index_url);
        assembler.download_bootstrap(&installer_dir.join("pip_wheels"))?;
        assembler.download_manifest(
            &installer_dir.join(&config.requirements_file),
            &installer_dir.join("packages"),
        )?;
    }

    nsis::compile_script(
        &installer_dir.join(&config.nsis_script),
        None,
        &to_define_map(defines),
    )?;
    Ok(())
}

/// Build a differential upgrade package from the tagged manifest.
///
/// Resolves the package range, writes the upgrade requirements file,
/// assembles the download bundle (empty bundles still exist on disk),
/// generates the upgrade script from the template, and compiles it.
pub fn cmd_build_upgrade(
    installer_dir: &Path,
    from_ver: &str,
    to_ver: Option<&str>,
    defines: &[(String, String)],
) -> Result<()> {
    let config = BuildConfig::load(installer_dir)?;
    let to_ver = to_ver.unwrap_or(&config.version);
    info!("building upgrade package {} -> {}", from_ver, to_ver);

    let manifest = TaggedManifest::load(&installer_dir.join(&config.requirements_file))?;
    let packages = resolve_range(&manifest, Some(from_ver), to_ver)?;

    let requirements = installer_dir.join(format!(
        "requirements_upgrade_{}_to_{}.txt",
        from_ver, to_ver
    ));
    bundle::write_requirements(&requirements, &packages)?;

    if packages.is_empty() {
        info!("no new packages, creating empty upgrade bundle");
    } else {
        info!("downloading {} packages for upgrade", packages.len());
    }
    let assembler = BundleAssembler::new(&config.python, &config.index_url);
    let bundle_dir = installer_dir.join(format!("packages_upgrade_{}_to_{}", from_ver, to_ver));
    assembler.assemble(&bundle_dir, &packages)?;

    let template = installer_dir.join("upgrade_template.nsi");
    let script = nsis::generate_upgrade_script(&template, installer_dir, from_ver, to_ver)?;
    nsis::compile_script(&script, None, &to_define_map(defines))?;
    Ok(())
}

/// Build a differential upgrade bundle by diffing two frozen snapshots.
///
/// Reads `requirements_<FROM>.txt` and `requirements_<TO>.txt` from the
/// installer directory; a missing snapshot is fatal. The bundle and the
/// diff requirements file are produced even when the diff is empty.
pub fn cmd_snapshot_upgrade(installer_dir: &Path, from_ver: &str, to_ver: &str) -> Result<()> {
    let config = BuildConfig::load(installer_dir)?;
    info!("creating differential upgrade {} -> {}", from_ver, to_ver);

    let from = SnapshotManifest::load(&installer_dir.join(format!(
        "requirements_{}.txt",
        from_ver
    )))?;
    let to = SnapshotManifest::load(&installer_dir.join(format!("requirements_{}.txt", to_ver)))?;

    let packages = resolve_diff(&from, &to);
    if packages.is_empty() {
        info!("no new packages between {} and {}", from_ver, to_ver);
    } else {
        info!("found {} new or updated packages:", packages.len());
        for package in &packages {
            info!("  - {}", package);
        }
    }

    let requirements = installer_dir.join(format!(
        "requirements_upgrade_{}_to_{}.txt",
        from_ver, to_ver
    ));
    bundle::write_requirements(&requirements, &packages)?;

    let assembler = BundleAssembler::new(&config.python, &config.index_url);
    let bundle_dir = installer_dir.join(format!("packages_upgrade_{}_to_{}", from_ver, to_ver));
    assembler.assemble(&bundle_dir, &packages)?;
    Ok(())
}

fn to_define_map(defines: &[(String, String)]) -> BTreeMap<String, String> {
    defines.iter().cloned().collect()
}
