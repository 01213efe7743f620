// src/version.rs

//! Release tag parsing and ordering.
//!
//! A release tag is a dotted numeric string ("1.8", "1.10", "2.0.1") that
//! marks the product release a dependency first shipped with. Comparison is
//! numeric per component with implicit zero padding for unequal lengths, so
//! "1.10" orders above "1.9" and "1.2" equals "1.2.0".

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// A parsed dotted-numeric release tag
#[derive(Debug, Clone)]
pub struct ReleaseTag {
    components: Vec<u64>,
    raw: String,
}

impl ReleaseTag {
    /// Parse a release tag string
    ///
    /// Every dot-separated component must be an unsigned integer. Leading
    /// and trailing whitespace is ignored; nothing else is tolerated.
    pub fn parse(s: &str) -> Result<Self> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(Error::VersionParse {
                input: s.to_string(),
                reason: "empty version string".to_string(),
            });
        }

        let mut components = Vec::new();
        for part in raw.split('.') {
            if part.is_empty() {
                return Err(Error::VersionParse {
                    input: raw.to_string(),
                    reason: "empty numeric component".to_string(),
                });
            }
            let value = part.parse::<u64>().map_err(|_| Error::VersionParse {
                input: raw.to_string(),
                reason: format!("component '{}' is not a number", part),
            })?;
            components.push(value);
        }

        Ok(Self {
            components,
            raw: raw.to_string(),
        })
    }

    /// Compare two tags component-wise, zero-padding the shorter one
    pub fn compare(&self, other: &ReleaseTag) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// The tag text as written, without surrounding whitespace
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// Equality follows the zero-padded numeric comparison, not the raw text,
// so "1.2" == "1.2.0" and Ord/Eq stay consistent.
impl PartialEq for ReleaseTag {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for ReleaseTag {}

impl Ord for ReleaseTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for ReleaseTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
