//! Check a request against the CDN and produce its include tag.

use crate::error::CdnError;
use crate::markup::{self, RenderMode};
use crate::probe::ExistenceCheck;
use crate::request::LibraryRequest;

/// Probes a URL and returns the status code if it is in the checker's accepted set.
///
/// Any other status, or a failure to get one, is [`CdnError::ResourceUnavailable`].
pub fn ensure_available<C>(url: &str, checker: &C) -> Result<u32, CdnError>
where
    C: ExistenceCheck + ?Sized,
{
    match checker.probe_status(url) {
        Ok(code) if checker.accepted_statuses().contains(&code) => {
            tracing::info!(url, code, "library file available");
            Ok(code)
        }
        Ok(code) => {
            tracing::warn!(url, code, "library file not available");
            Err(CdnError::unavailable_status(url, code))
        }
        Err(e) => {
            tracing::warn!(url, "existence check failed: {}", e);
            Err(CdnError::unreachable(url, e))
        }
    }
}

/// Probes the request's URL and, if it is servable, returns the include tag.
///
/// An unavailable file yields [`CdnError::ResourceUnavailable`]; nothing is
/// rendered in that case.
pub fn load<C>(req: &LibraryRequest, checker: &C, mode: RenderMode) -> Result<String, CdnError>
where
    C: ExistenceCheck + ?Sized,
{
    ensure_available(req.url(), checker)?;
    Ok(markup::render_tag(req.file_type(), req.url(), mode))
}

/// Renders the tag without probing the CDN.
pub fn render_unchecked(req: &LibraryRequest, mode: RenderMode) -> String {
    markup::render_tag(req.file_type(), req.url(), mode)
}
