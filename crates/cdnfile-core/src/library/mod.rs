//! Library name normalization and CDN path construction.
//!
//! Turns a user-facing library name into the canonical key used by Google
//! Hosted Libraries, then derives the file fragment and full URL for a given
//! version and file type. Everything here is pure string work.

mod normalize;
mod path;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use normalize::normalize_library_key;
pub use path::{build_file_path, insert_connector, rule_for, PathRule};

/// Every hosted file lives under this prefix.
pub const SOURCE_PREFIX: &str = "https://ajax.googleapis.com/ajax/libs/";

/// Kind of file requested from the CDN.
///
/// Serializes as `"js"` / `"css"`; deserialization goes through
/// [`FileType::parse`], so `"CSS"` or an unknown value are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum FileType {
    #[default]
    #[serde(rename = "js")]
    Script,
    #[serde(rename = "css")]
    Stylesheet,
}

impl FileType {
    /// Parses a case-insensitive file type. Only `"css"` selects a stylesheet;
    /// anything else, including unrecognized input, is treated as a script.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("css") {
            FileType::Stylesheet
        } else {
            FileType::Script
        }
    }

    /// File extension used in CDN paths.
    pub fn extension(self) -> &'static str {
        match self {
            FileType::Script => "js",
            FileType::Stylesheet => "css",
        }
    }
}

impl From<&str> for FileType {
    fn from(s: &str) -> Self {
        FileType::parse(s)
    }
}

impl From<String> for FileType {
    fn from(s: String) -> Self {
        FileType::parse(&s)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Builds the full URL on the default Google CDN prefix.
pub fn build_url(key: &str, version: &str, fragment: &str) -> String {
    build_url_with_prefix(SOURCE_PREFIX, key, version, fragment)
}

/// Builds `<prefix><key>/<version>/<fragment>`. No escaping is applied.
///
/// A prefix without a trailing slash gets one, so `https://mirror.example/libs`
/// and `https://mirror.example/libs/` behave the same.
pub fn build_url_with_prefix(prefix: &str, key: &str, version: &str, fragment: &str) -> String {
    let sep = if prefix.ends_with('/') { "" } else { "/" };
    format!("{prefix}{sep}{key}/{version}/{fragment}")
}
