// src/archive.rs

//! Zipapp packaging for the installer smoke test.
//!
//! The installer payload is exercised with a small Python zipapp: the
//! source tree is archived into a `.pyz` the target interpreter can run
//! directly. Entries are added in sorted path order so rebuilding from an
//! unchanged tree produces an identical archive.

use crate::error::{Error, Result};
use crate::process::run_tool;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::info;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build a zipapp archive from a source directory.
///
/// The directory must contain a `__main__.py` entry point, mirroring what
/// the Python interpreter requires to execute the archive.
pub fn make_zipapp(source_dir: &Path, output: &Path) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(Error::Zipapp(format!(
            "source directory {} does not exist",
            source_dir.display()
        )));
    }
    if !source_dir.join("__main__.py").is_file() {
        return Err(Error::Zipapp(format!(
            "{} has no __main__.py entry point",
            source_dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source_dir) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();

    let mut writer = ZipWriter::new(File::create(output)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in &files {
        let name = path
            .strip_prefix(source_dir)
            .expect("walked path is under the source dir")
            .to_string_lossy()
            .replace('\\', "/");
        writer.start_file(name, options)?;
        io::copy(&mut File::open(path)?, &mut writer)?;
    }
    writer.finish()?;

    info!("created zipapp {}", output.display());
    Ok(())
}

/// Run a zipapp through the given Python interpreter
pub fn run_zipapp(python: &str, archive: &Path) -> Result<()> {
    if !archive.exists() {
        return Err(Error::Zipapp(format!(
            "{} not found; run make-zipapp first",
            archive.display()
        )));
    }
    run_tool(python, Command::new(python).arg(archive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use zip::ZipArchive;

    #[test]
    fn test_missing_source_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = make_zipapp(&dir.path().join("nope"), &dir.path().join("out.pyz")).unwrap_err();
        assert!(matches!(err, Error::Zipapp(_)));
    }

    #[test]
    fn test_missing_entry_point_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("app");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("util.py"), "x = 1\n").unwrap();

        let err = make_zipapp(&source, &dir.path().join("out.pyz")).unwrap_err();
        assert!(matches!(err, Error::Zipapp(_)));
    }

    #[test]
    fn test_archive_contains_sorted_tree() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("app");
        fs::create_dir_all(source.join("pkg")).unwrap();
        fs::write(source.join("__main__.py"), "print('ok')\n").unwrap();
        fs::write(source.join("pkg").join("mod.py"), "y = 2\n").unwrap();
        let output = dir.path().join("app.pyz");

        make_zipapp(&source, &output).unwrap();

        let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["__main__.py", "pkg/mod.py"]);
    }

    #[test]
    fn test_run_missing_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_zipapp("python", &dir.path().join("app.pyz")).unwrap_err();
        assert!(matches!(err, Error::Zipapp(_)));
    }
}
