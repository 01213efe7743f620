// src/platform.rs

//! Platform-specific environment operations.
//!
//! The core consumes registry cleanup as a capability rather than
//! implementing it inline: commands receive a [`Platform`] and the
//! unsupported-platform implementation degrades to a logged no-op, so the
//! rest of the tool behaves identically everywhere.

use crate::error::{Error, Result};
use crate::process::run_tool;
use std::io;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Environment operations the build tool needs from the host OS
pub trait Platform {
    /// Delete the product's installer registry keys
    fn clean_registry(&self, product_name: &str) -> Result<()>;
}

/// Registry cleanup through reg.exe
pub struct WindowsPlatform;

/// No-op implementation for hosts without a Windows registry
pub struct NullPlatform;

/// The implementation matching the running host
pub fn native() -> Box<dyn Platform> {
    if cfg!(windows) {
        Box::new(WindowsPlatform)
    } else {
        Box::new(NullPlatform)
    }
}

impl WindowsPlatform {
    fn product_keys(product_name: &str) -> [String; 2] {
        [
            format!(r"HKLM\Software\{}", product_name),
            format!(
                r"HKLM\Software\Microsoft\Windows\CurrentVersion\Uninstall\{}",
                product_name
            ),
        ]
    }

    fn key_exists(key: &str) -> Result<bool> {
        let status = Command::new("reg")
            .args(["query", key])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => Error::ToolNotFound("reg".to_string()),
                _ => Error::Io(err),
            })?;
        Ok(status.success())
    }
}

impl Platform for WindowsPlatform {
    fn clean_registry(&self, product_name: &str) -> Result<()> {
        for key in Self::product_keys(product_name) {
            if !Self::key_exists(&key)? {
                info!("registry key not found: {}", key);
                continue;
            }
            // Deletes the key and all subkeys; access-denied surfaces as a
            // reg.exe failure and aborts the cleanup.
            run_tool("reg", Command::new("reg").args(["delete", &key, "/f"]))?;
            info!("deleted registry key: {}", key);
        }
        Ok(())
    }
}

impl Platform for NullPlatform {
    fn clean_registry(&self, _product_name: &str) -> Result<()> {
        warn!("registry cleanup is only supported on Windows");
        Ok(())
    }
}
