// src/manifest/tagged.rs

//! Tag-annotated requirements manifest.
//!
//! The cumulative manifest groups package specifiers under inline version-tag
//! markers. A marker line like "# v 1.8" (case-insensitive, space optional)
//! switches the active tag for every specifier line that follows, until the
//! next marker. Specifiers before the first marker belong to the "base" tag.
//!
//! Parsing is permissive: the file is authored by hand and a typo must not
//! hard-fail the build. Lines that are neither blank, markers, nor comments
//! are taken verbatim as package specifiers.

use crate::error::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Sentinel tag for specifiers that precede any version marker.
///
/// Packages under this tag are ungated: they are part of every full install
/// and never participate in range comparisons.
pub const BASE_TAG: &str = "base";

fn tag_marker() -> Regex {
    Regex::new(r"(?i)^#\s*v\s*([\d.]+)").unwrap()
}

/// A parsed tag-annotated manifest: version tag -> specifiers in file order
#[derive(Debug, Clone, Default)]
pub struct TaggedManifest {
    // First-seen tag order is preserved; a tag that reappears later in the
    // file merges into its existing group.
    groups: Vec<(String, Vec<String>)>,
}

impl TaggedManifest {
    /// Parse manifest text. Never fails on content.
    pub fn parse(text: &str) -> Self {
        let marker = tag_marker();
        let mut manifest = TaggedManifest::default();
        let mut current_tag = BASE_TAG.to_string();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(captures) = marker.captures(line) {
                current_tag = captures[1].to_string();
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            manifest.push(&current_tag, line.to_string());
        }

        manifest
    }

    /// Load and parse a manifest file. A missing file is an empty manifest.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(TaggedManifest::default());
        }
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    fn push(&mut self, tag: &str, specifier: String) {
        match self.groups.iter_mut().find(|(t, _)| t == tag) {
            Some((_, specifiers)) => specifiers.push(specifier),
            None => self.groups.push((tag.to_string(), vec![specifier])),
        }
    }

    /// Iterate tag groups in first-seen order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.groups.iter().map(|(t, s)| (t.as_str(), s.as_slice()))
    }

    /// Specifiers recorded under one tag, if any
    pub fn specifiers(&self, tag: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, s)| s.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Insert a specifier into the manifest file under the given version tag.
///
/// If a marker line for the tag already exists the specifier is inserted
/// directly below it; otherwise a new marker and the specifier are appended
/// at the end of the file. The file is created when absent.
pub fn add_specifier(path: &Path, package: &str, tag: &str) -> Result<()> {
    let text = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

    let spaced = format!("# v {}", tag);
    let compact = format!("# v{}", tag);
    let marker_index = lines.iter().position(|line| {
        let line = line.trim_end();
        line.eq_ignore_ascii_case(&spaced) || line.eq_ignore_ascii_case(&compact)
    });

    match marker_index {
        Some(index) => lines.insert(index + 1, package.to_string()),
        None => {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(spaced);
            lines.push(package.to_string());
        }
    }

    fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}
