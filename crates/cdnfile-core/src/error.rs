//! Error types returned to embedding callers.

use thiserror::Error;

use crate::probe::ProbeError;

/// Errors surfaced by loading and strict validation.
///
/// Resolution itself never fails; only the existence check and the opt-in
/// strict checks produce errors, and termination is left to the caller.
#[derive(Debug, Error)]
pub enum CdnError {
    /// The CDN answered with a status outside the accepted set, or could not
    /// be reached at all (`status` is `None` and `source` holds the cause).
    #[error("The file {url} doesn't exist.")]
    ResourceUnavailable {
        url: String,
        status: Option<u32>,
        #[source]
        source: Option<ProbeError>,
    },

    /// A library, version or theme value is not safe as a URL path segment.
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidSegment {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The assembled URL does not parse.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl CdnError {
    pub fn unavailable_status(url: &str, status: u32) -> Self {
        CdnError::ResourceUnavailable {
            url: url.to_string(),
            status: Some(status),
            source: None,
        }
    }

    pub fn unreachable(url: &str, source: ProbeError) -> Self {
        CdnError::ResourceUnavailable {
            url: url.to_string(),
            status: None,
            source: Some(source),
        }
    }

    /// True for the "file is not servable" condition.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CdnError::ResourceUnavailable { .. })
    }
}
