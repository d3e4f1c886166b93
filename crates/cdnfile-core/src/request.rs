//! `LibraryRequest`: one library file to load from the CDN.
//!
//! The value is immutable; each `with_*` call returns a new request whose URL
//! has been recomputed from the current inputs, so the URL can never drift
//! from the library, version, file type and theme it was built from.

use crate::library::{self, FileType, SOURCE_PREFIX};

pub const DEFAULT_LIBRARY: &str = "jQuery";
pub const DEFAULT_VERSION: &str = "1.11.2";
pub const DEFAULT_THEME: &str = "smoothness";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRequest {
    library_raw: String,
    library: String,
    version: String,
    file_type: FileType,
    theme: String,
    prefix: String,
    url: String,
}

impl Default for LibraryRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARY, DEFAULT_VERSION, FileType::Script, DEFAULT_THEME)
    }
}

impl LibraryRequest {
    /// Creates a request on the default Google CDN prefix.
    ///
    /// `file_type` accepts either a [`FileType`] or a string such as `"CSS"`.
    pub fn new(
        library: &str,
        version: &str,
        file_type: impl Into<FileType>,
        theme: &str,
    ) -> Self {
        let mut req = Self {
            library_raw: library.to_string(),
            library: library::normalize_library_key(library),
            version: version.to_ascii_lowercase(),
            file_type: file_type.into(),
            theme: theme.to_ascii_lowercase(),
            prefix: SOURCE_PREFIX.to_string(),
            url: String::new(),
        };
        req.url = resolve(&req);
        req
    }

    pub fn with_library(mut self, library: &str) -> Self {
        self.library_raw = library.to_string();
        self.library = library::normalize_library_key(library);
        self.recompute()
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_ascii_lowercase();
        self.recompute()
    }

    pub fn with_file_type(mut self, file_type: impl Into<FileType>) -> Self {
        self.file_type = file_type.into();
        self.recompute()
    }

    pub fn with_theme(mut self, theme: &str) -> Self {
        self.theme = theme.to_ascii_lowercase();
        self.recompute()
    }

    /// Points the request at a mirror instead of the Google CDN.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self.recompute()
    }

    fn recompute(mut self) -> Self {
        self.url = resolve(&self);
        tracing::trace!(url = %self.url, "resolved library request");
        self
    }

    /// The name as the caller supplied it.
    pub fn library_raw(&self) -> &str {
        &self.library_raw
    }

    /// Canonical key, also the first path segment after the prefix.
    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// File fragment after `<key>/<version>/`.
    pub fn file_path(&self) -> String {
        library::build_file_path(&self.library, self.file_type, &self.theme)
    }
}

/// Computes the URL for a request from its inputs alone.
pub fn resolve(req: &LibraryRequest) -> String {
    library::build_url_with_prefix(&req.prefix, &req.library, &req.version, &req.file_path())
}
