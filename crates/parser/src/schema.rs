//! Schema version detection for raw generator files.
//!
//! A single sniff over the file text, done before full JSON parsing so
//! callers can reject unsupported versions cheaply.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)"version"\s*:\s*([2-5])"#).expect("valid version pattern"));

/// Known document schema versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    V2,
    V3,
    V4,
    V5,
    Unknown,
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::V5 => "v5",
            Self::Unknown => "unknown",
        };
        write!(f, "{token}")
    }
}

/// Sniffs the schema version from raw file content. Blank or unmatched
/// content yields [`SchemaVersion::Unknown`].
pub fn detect(content: &str) -> SchemaVersion {
    if content.trim().is_empty() {
        return SchemaVersion::Unknown;
    }
    match VERSION_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    {
        Some("2") => SchemaVersion::V2,
        Some("3") => SchemaVersion::V3,
        Some("4") => SchemaVersion::V4,
        Some("5") => SchemaVersion::V5,
        _ => SchemaVersion::Unknown,
    }
}
