// src/bundle.rs

//! Differential bundle assembly.
//!
//! Turns a resolved package set into a downloadable upgrade bundle: a
//! version-stamped directory holding the fetched package archives. The
//! download itself is delegated to pip, invoked once with a generated
//! requirements file, so pip's own resolution and retry policy applies.
//!
//! Bundle directories are always destroyed and rebuilt so a bundle never
//! mixes the output of two runs.

use crate::error::Result;
use crate::process::run_tool;
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Name of the ephemeral requirements file that drives a bundle download
const BUNDLE_REQUIREMENTS: &str = "temp_reqs.txt";

/// Requirements used to bootstrap the target machine's package tooling
const BOOTSTRAP_PACKAGES: [&str; 3] = ["pip", "setuptools", "wheel"];

/// Drives pip downloads into bundle directories
#[derive(Debug, Clone)]
pub struct BundleAssembler {
    python: PathBuf,
    index_url: String,
}

impl BundleAssembler {
    pub fn new(python: impl Into<PathBuf>, index_url: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            index_url: index_url.into(),
        }
    }

    /// Assemble a differential bundle for a resolved package set.
    ///
    /// The target directory is recreated from scratch. An empty set is a
    /// success and produces an existing-but-empty bundle, since downstream
    /// packaging expects the directory to be present. For a non-empty set
    /// the specifiers are written one per line into the bundle and fetched
    /// with a single batched pip invocation; the requirements file is
    /// removed after a successful download and kept for diagnosis when the
    /// download fails.
    pub fn assemble(&self, target_dir: &Path, packages: &BTreeSet<String>) -> Result<()> {
        if target_dir.exists() {
            fs::remove_dir_all(target_dir)?;
        }
        fs::create_dir_all(target_dir)?;

        if packages.is_empty() {
            info!("no packages to download, leaving empty bundle");
            return Ok(());
        }

        let requirements = target_dir.join(BUNDLE_REQUIREMENTS);
        write_requirements(&requirements, packages)?;

        self.download(&requirements, target_dir)?;
        fs::remove_file(&requirements)?;
        Ok(())
    }

    /// Download everything in an existing requirements file into `dest`
    pub fn download_manifest(&self, requirements: &Path, dest: &Path) -> Result<()> {
        fs::create_dir_all(dest)?;
        self.download(requirements, dest)
    }

    /// Fetch the pip/setuptools/wheel bootstrap wheels into `dest`
    pub fn download_bootstrap(&self, dest: &Path) -> Result<()> {
        fs::create_dir_all(dest)?;
        let requirements = dest.join("pip_tools_reqs.txt");
        write_requirements(
            &requirements,
            &BOOTSTRAP_PACKAGES.iter().map(|p| p.to_string()).collect(),
        )?;

        self.download(&requirements, dest)?;
        fs::remove_file(&requirements)?;
        Ok(())
    }

    /// One batched `pip download` call; a failure for any package fails the
    /// whole batch.
    fn download(&self, requirements: &Path, dest: &Path) -> Result<()> {
        let mut command = Command::new(&self.python);
        command
            .arg("-m")
            .arg("pip")
            .arg("download")
            .arg("-r")
            .arg(requirements)
            .arg("-d")
            .arg(dest)
            .arg("-i")
            .arg(&self.index_url);
        run_tool("pip download", &mut command)
    }
}

/// Write a requirements file, one specifier per line, in set order
pub fn write_requirements(path: &Path, packages: &BTreeSet<String>) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for package in packages {
        writeln!(file, "{}", package)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn packages(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_set_creates_empty_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("packages_upgrade_1.8_to_1.9");

        let assembler = BundleAssembler::new("python", "https://pypi.org/simple");
        assembler.assemble(&bundle, &BTreeSet::new()).unwrap();

        assert!(bundle.is_dir());
        assert_eq!(fs::read_dir(&bundle).unwrap().count(), 0);
    }

    #[test]
    fn test_stale_bundle_is_destroyed() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("packages_upgrade_1.8_to_1.9");
        fs::create_dir_all(&bundle).unwrap();
        fs::write(bundle.join("stale.whl"), b"old").unwrap();

        let assembler = BundleAssembler::new("python", "https://pypi.org/simple");
        assembler.assemble(&bundle, &BTreeSet::new()).unwrap();

        assert!(!bundle.join("stale.whl").exists());
    }

    #[test]
    fn test_write_requirements_sorted_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reqs.txt");

        write_requirements(&path, &packages(&["zlib", "alpha>=1.0"])).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "alpha>=1.0\nzlib\n"
        );
    }

    // The downloader is an external tool; stand in a shell no-op for it so
    // the full assemble path can run.
    #[cfg(unix)]
    #[test]
    fn test_assemble_removes_requirements_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle");

        let assembler = BundleAssembler::new("true", "https://pypi.org/simple");
        assembler.assemble(&bundle, &packages(&["pkg"])).unwrap();

        assert!(bundle.is_dir());
        assert!(!bundle.join(BUNDLE_REQUIREMENTS).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_assemble_keeps_requirements_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("bundle");

        let assembler = BundleAssembler::new("false", "https://pypi.org/simple");
        let err = assembler.assemble(&bundle, &packages(&["pkg"])).unwrap_err();

        assert!(matches!(err, Error::ToolFailure { .. }));
        assert_eq!(
            fs::read_to_string(bundle.join(BUNDLE_REQUIREMENTS)).unwrap(),
            "pkg\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_download_bootstrap_writes_then_cleans_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("pip_wheels");

        let assembler = BundleAssembler::new("true", "https://pypi.org/simple");
        assembler.download_bootstrap(&dest).unwrap();

        assert!(dest.is_dir());
        assert!(!dest.join("pip_tools_reqs.txt").exists());
    }
}
