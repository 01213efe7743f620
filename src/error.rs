// src/error.rs

//! Error types for the packsmith build tool

use std::path::PathBuf;
use thiserror::Error;

/// Result type for packsmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building installer artifacts
#[derive(Error, Debug)]
pub enum Error {
    /// A version string could not be parsed as a dotted numeric tag
    #[error("invalid version '{input}': {reason}")]
    VersionParse { input: String, reason: String },

    /// A required snapshot requirements file was not found
    #[error("requirements manifest not found: {0}")]
    MissingManifest(PathBuf),

    /// The installer script or template to compile was not found
    #[error("installer script not found: {0}")]
    MissingScript(PathBuf),

    /// An external tool binary could not be located
    #[error("external tool not found in PATH: {0}")]
    ToolNotFound(String),

    /// An external tool exited with a non-zero status
    #[error("{tool} failed with exit code {code}")]
    ToolFailure { tool: String, code: i32 },

    /// Zipapp source tree is missing or not runnable
    #[error("zipapp error: {0}")]
    Zipapp(String),

    /// Archive read/write error
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Build configuration could not be parsed
    #[error("config error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Build configuration could not be serialized
    #[error("config error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
