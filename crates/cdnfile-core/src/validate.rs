//! Opt-in strict checks for request values.
//!
//! Resolution is permissive by default: any library, version or theme string
//! is embedded into the URL unchanged. Strict mode rejects values that would
//! escape their path segment or produce an unparseable URL.

use crate::error::CdnError;
use crate::library::FileType;
use crate::request::LibraryRequest;

/// Checks a single path segment value.
pub fn check_segment(field: &'static str, value: &str) -> Result<(), CdnError> {
    let reason = if value.is_empty() {
        Some("is empty")
    } else if value == "." || value == ".." {
        Some("is a relative path component")
    } else if value.contains('/') || value.contains('\\') {
        Some("contains a path separator")
    } else if value.contains(['?', '#', '%']) {
        Some("contains a URL delimiter")
    } else if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("contains whitespace or control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CdnError::InvalidSegment {
            field,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Runs every strict check against a request.
///
/// The theme is only checked when it ends up in the URL (jQuery UI stylesheet).
pub fn check_request(req: &LibraryRequest) -> Result<(), CdnError> {
    check_segment("library", req.library())?;
    check_segment("version", req.version())?;
    if req.library() == "jqueryui" && req.file_type() == FileType::Stylesheet {
        check_segment("theme", req.theme())?;
    }
    url::Url::parse(req.url()).map_err(|source| CdnError::InvalidUrl {
        url: req.url().to_string(),
        source,
    })?;
    Ok(())
}
