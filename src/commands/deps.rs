// src/commands/deps.rs

//! Dependency manifest and download commands.

use anyhow::Result;
use packsmith::bundle::BundleAssembler;
use packsmith::config::BuildConfig;
use packsmith::manifest::{self, TaggedManifest};
use packsmith::resolve::resolve_range;
use std::path::Path;
use tracing::info;

/// Add a package specifier to the tagged manifest.
///
/// With no explicit tag the configured current version is used, so new
/// dependencies land under the release being worked on.
pub fn cmd_add_dep(installer_dir: &Path, package: &str, tag: Option<&str>) -> Result<()> {
    let config = BuildConfig::load(installer_dir)?;
    let tag = tag.unwrap_or(&config.version);

    let manifest_path = installer_dir.join(&config.requirements_file);
    manifest::add_specifier(&manifest_path, package, tag)?;
    info!("added {} under version tag {}", package, tag);
    Ok(())
}

/// Download dependencies: the whole manifest, or only a version-range diff.
///
/// Bootstrap wheels (pip, setuptools, wheel) are always fetched first; the
/// installer needs them on the target machine before anything else.
pub fn cmd_download_deps(installer_dir: &Path, diff: Option<(&str, &str)>) -> Result<()> {
    let config = BuildConfig::load(installer_dir)?;
    let assembler = BundleAssembler::new(&config.python, &config.index_url);

    assembler.download_bootstrap(&installer_dir.join("pip_wheels"))?;

    match diff {
        Some((from_ver, to_ver)) => {
            info!("downloading diff {} -> {}", from_ver, to_ver);
            let manifest = TaggedManifest::load(&installer_dir.join(&config.requirements_file))?;
            let packages = resolve_range(&manifest, Some(from_ver), to_ver)?;
            if packages.is_empty() {
                info!("no new packages to download");
            } else {
                info!("packages: {:?}", packages);
            }
            let bundle_dir =
                installer_dir.join(format!("packages_upgrade_{}_to_{}", from_ver, to_ver));
            assembler.assemble(&bundle_dir, &packages)?;
        }
        None => {
            info!("downloading all dependencies");
            assembler.download_manifest(
                &installer_dir.join(&config.requirements_file),
                &installer_dir.join("packages"),
            )?;
        }
    }
    Ok(())
}
