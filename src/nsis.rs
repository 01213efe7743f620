// src/nsis.rs

//! NSIS script compilation with transcoding.
//!
//! makensis mishandles UTF-8 scripts whose strings carry a non-ASCII
//! product name, so every script is rewritten as UTF-16BE with a byte-order
//! mark before compilation. Upgrade scripts are produced from a template by
//! literal placeholder substitution: `%%FROM_VERSION%%` and
//! `%%TO_VERSION%%` become the concrete version strings.

use crate::error::{Error, Result};
use crate::process::run_tool;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// Placeholder name for the version being upgraded from
pub const FROM_VERSION: &str = "FROM_VERSION";

/// Placeholder name for the version being upgraded to
pub const TO_VERSION: &str = "TO_VERSION";

/// Locate the makensis binary on PATH
pub fn find_makensis() -> Result<PathBuf> {
    which::which("makensis").map_err(|_| Error::ToolNotFound("makensis".to_string()))
}

/// Expand `%%NAME%%` placeholder tokens by literal substring replacement.
///
/// Every occurrence of a token is replaced; a token with no match in the
/// text is silently left as-is, and tokens present in the text but absent
/// from the map survive verbatim.
pub fn expand_placeholders(text: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = text.to_string();
    for (name, value) in values {
        out = out.replace(&format!("%%{}%%", name), value);
    }
    out
}

/// Write `text` to `dest` as UTF-16BE with a leading byte-order mark
pub fn write_utf16be(dest: &Path, text: &str) -> Result<()> {
    let mut bytes = Vec::with_capacity(text.len() * 2 + 2);
    bytes.extend_from_slice(&[0xFE, 0xFF]);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    fs::write(dest, bytes)?;
    Ok(())
}

/// Render the upgrade template for a version pair and write the resulting
/// script as `upgrade_{from}_to_{to}.nsi` beside the other installer files.
pub fn generate_upgrade_script(
    template: &Path,
    installer_dir: &Path,
    from_ver: &str,
    to_ver: &str,
) -> Result<PathBuf> {
    if !template.exists() {
        return Err(Error::MissingScript(template.to_path_buf()));
    }

    let values = BTreeMap::from([
        (FROM_VERSION.to_string(), from_ver.to_string()),
        (TO_VERSION.to_string(), to_ver.to_string()),
    ]);
    let rendered = expand_placeholders(&fs::read_to_string(template)?, &values);

    let dest = installer_dir.join(format!("upgrade_{}_to_{}.nsi", from_ver, to_ver));
    fs::write(&dest, rendered)?;
    info!("generated upgrade script {}", dest.display());
    Ok(dest)
}

/// Transcode and compile an NSIS script.
///
/// Placeholders, when supplied, are substituted over the full script text
/// before anything else. The (possibly substituted) text is then written to
/// a sibling `.utf16be.nsi` file and makensis is invoked on that file with
/// the caller's `/Dkey=value` defines, the fixed verbosity flag, and the
/// script path last — makensis is sensitive to argument order.
pub fn compile_script(
    script: &Path,
    placeholders: Option<&BTreeMap<String, String>>,
    defines: &BTreeMap<String, String>,
) -> Result<()> {
    if !script.exists() {
        return Err(Error::MissingScript(script.to_path_buf()));
    }
    let makensis = find_makensis()?;

    let mut text = fs::read_to_string(script)?;
    if let Some(values) = placeholders {
        text = expand_placeholders(&text, values);
    }

    let transcoded = script.with_extension("utf16be.nsi");
    write_utf16be(&transcoded, &text)?;
    info!("compiling {}", transcoded.display());

    let mut command = Command::new(makensis);
    for (key, value) in defines {
        command.arg(format!("/D{}={}", key, value));
    }
    command.arg("/V2").arg(&transcoded);
    run_tool("makensis", &mut command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_expand_replaces_every_occurrence() {
        let text = "from %%FROM_VERSION%% and again %%FROM_VERSION%%";
        let out = expand_placeholders(text, &values(&[("FROM_VERSION", "1.8")]));
        assert_eq!(out, "from 1.8 and again 1.8");
    }

    #[test]
    fn test_expand_unmatched_token_survives() {
        let text = "to %%TO_VERSION%%";
        let out = expand_placeholders(text, &values(&[("FROM_VERSION", "1.8")]));
        assert_eq!(out, "to %%TO_VERSION%%");
    }

    #[test]
    fn test_expand_without_tokens_is_identity() {
        let out = expand_placeholders("plain text", &values(&[("FROM_VERSION", "1.8")]));
        assert_eq!(out, "plain text");
    }

    #[test]
    fn test_write_utf16be_bom_and_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.utf16be.nsi");

        write_utf16be(&path, "A").unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![0xFE, 0xFF, 0x00, 0x41]);
    }

    #[test]
    fn test_write_utf16be_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.utf16be.nsi");

        // U+00E9 LATIN SMALL LETTER E WITH ACUTE
        write_utf16be(&path, "é").unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![0xFE, 0xFF, 0x00, 0xE9]);
    }

    #[test]
    fn test_generate_upgrade_script() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("upgrade_template.nsi");
        fs::write(
            &template,
            "Name \"Upgrade %%FROM_VERSION%% -> %%TO_VERSION%%\"\n",
        )
        .unwrap();

        let script = generate_upgrade_script(&template, dir.path(), "1.8", "1.9").unwrap();

        assert_eq!(script, dir.path().join("upgrade_1.8_to_1.9.nsi"));
        assert_eq!(
            fs::read_to_string(&script).unwrap(),
            "Name \"Upgrade 1.8 -> 1.9\"\n"
        );
    }

    #[test]
    fn test_generate_missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_upgrade_script(&dir.path().join("nope.nsi"), dir.path(), "1.8", "1.9")
            .unwrap_err();
        assert!(matches!(err, Error::MissingScript(_)));
    }

    #[test]
    fn test_compile_missing_script_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = compile_script(&dir.path().join("nope.nsi"), None, &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, Error::MissingScript(_)));
    }
}
