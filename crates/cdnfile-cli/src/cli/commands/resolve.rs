//! `cdnfile resolve` – print the URL for a library file.

use anyhow::Result;
use serde::Serialize;

use cdnfile_core::{catalog, FileType, LibraryRequest};

/// JSON shape printed by `resolve --json`.
#[derive(Debug, Serialize)]
pub struct ResolvedOutput<'a> {
    pub library: &'a str,
    pub key: &'a str,
    pub version: &'a str,
    pub file_type: FileType,
    pub theme: &'a str,
    pub path: String,
    pub url: &'a str,
    /// Whether the key is a known Google Hosted Library.
    pub hosted: bool,
}

impl<'a> ResolvedOutput<'a> {
    pub fn from_request(req: &'a LibraryRequest) -> Self {
        Self {
            library: req.library_raw(),
            key: req.library(),
            version: req.version(),
            file_type: req.file_type(),
            theme: req.theme(),
            path: req.file_path(),
            url: req.url(),
            hosted: catalog::lookup(req.library()).is_some(),
        }
    }
}

pub fn run_resolve(req: &LibraryRequest, json: bool) -> Result<()> {
    if json {
        let out = ResolvedOutput::from_request(req);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", req.url());
    }
    Ok(())
}
