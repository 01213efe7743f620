// src/process.rs

//! External process invocation.
//!
//! Every external tool (pip, makensis, reg) is awaited to completion with
//! stdio inherited, so its diagnostics reach the user unaltered. There is
//! no timeout layer: a hung tool blocks the pipeline, which is acceptable
//! for a build-time tool.

use crate::error::{Error, Result};
use std::io;
use std::process::Command;
use tracing::info;

/// Run a command to completion, mapping failure to a typed error.
///
/// A spawn failure caused by a missing binary becomes `ToolNotFound`; a
/// non-zero exit becomes `ToolFailure` carrying the exit code.
pub(crate) fn run_tool(tool: &str, command: &mut Command) -> Result<()> {
    info!("exec: {:?}", command);
    let status = command.status().map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::ToolNotFound(tool.to_string()),
        _ => Error::Io(err),
    })?;

    if !status.success() {
        return Err(Error::ToolFailure {
            tool: tool.to_string(),
            code: status.code().unwrap_or(-1),
        });
    }
    Ok(())
}
