//! HTTP existence check for resolved URLs.
//!
//! Uses the curl crate (libcurl) to issue a HEAD request and read the response
//! status. A URL is considered available when the status is in the accepted
//! set (200 and 304 by default). The check is exposed as a trait so callers
//! can wrap it with their own timeout or retry policy, or swap in a stub.

use std::time::Duration;
use thiserror::Error;

use crate::config::ProbeConfig;

/// Failure to obtain a status code at all.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("HEAD {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("HEAD {0} returned no status code")]
    NoStatus(String),
}

/// Existence check collaborator.
pub trait ExistenceCheck {
    /// Returns the HTTP status code the server answered with.
    fn probe_status(&self, url: &str) -> Result<u32, ProbeError>;

    /// Status codes that count as "available".
    fn accepted_statuses(&self) -> &[u32] {
        &[200, 304]
    }

    /// True iff the URL answers with an accepted status. Transport failures count as unavailable.
    fn check_available(&self, url: &str) -> bool {
        match self.probe_status(url) {
            Ok(code) => self.accepted_statuses().contains(&code),
            Err(e) => {
                tracing::warn!("existence check failed: {}", e);
                false
            }
        }
    }
}

/// HEAD probe backed by libcurl.
#[derive(Debug, Clone)]
pub struct CurlProbe {
    connect_timeout: Duration,
    timeout: Duration,
    follow_redirects: bool,
    accepted: Vec<u32>,
}

impl Default for CurlProbe {
    fn default() -> Self {
        Self::from_config(&ProbeConfig::default())
    }
}

impl CurlProbe {
    pub fn from_config(cfg: &ProbeConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            follow_redirects: cfg.follow_redirects,
            accepted: cfg.accepted_statuses.clone(),
        }
    }
}

impl ExistenceCheck for CurlProbe {
    /// Performs a HEAD request in the current thread.
    ///
    /// Redirects are not followed unless configured, so the first status line
    /// decides availability.
    fn probe_status(&self, url: &str) -> Result<u32, ProbeError> {
        let transport = |source: curl::Error| ProbeError::Transport {
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|source| ProbeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        easy.nobody(true).map_err(transport)?; // HEAD request
        easy.follow_location(self.follow_redirects)
            .map_err(transport)?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(transport)?;
        easy.timeout(self.timeout).map_err(transport)?;
        easy.perform().map_err(transport)?;

        let code = easy.response_code().map_err(transport)?;
        if code == 0 {
            return Err(ProbeError::NoStatus(url.to_string()));
        }
        tracing::debug!(url, code, "HEAD probe");
        Ok(code)
    }

    fn accepted_statuses(&self) -> &[u32] {
        &self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStatus(u32);

    impl ExistenceCheck for FixedStatus {
        fn probe_status(&self, _url: &str) -> Result<u32, ProbeError> {
            Ok(self.0)
        }
    }

    struct Unreachable;

    impl ExistenceCheck for Unreachable {
        fn probe_status(&self, url: &str) -> Result<u32, ProbeError> {
            Err(ProbeError::NoStatus(url.to_string()))
        }
    }

    #[test]
    fn accepted_statuses_default() {
        assert!(FixedStatus(200).check_available("http://x/"));
        assert!(FixedStatus(304).check_available("http://x/"));
    }

    #[test]
    fn other_statuses_are_unavailable() {
        for code in [201, 204, 301, 302, 403, 404, 500] {
            assert!(!FixedStatus(code).check_available("http://x/"), "{code}");
        }
    }

    #[test]
    fn transport_failure_is_unavailable() {
        assert!(!Unreachable.check_available("http://x/"));
    }

    #[test]
    fn curl_probe_uses_config() {
        let cfg = ProbeConfig {
            connect_timeout_secs: 3,
            timeout_secs: 7,
            follow_redirects: true,
            accepted_statuses: vec![200],
        };
        let probe = CurlProbe::from_config(&cfg);
        assert_eq!(probe.connect_timeout, Duration::from_secs(3));
        assert_eq!(probe.timeout, Duration::from_secs(7));
        assert!(probe.follow_redirects);
        assert_eq!(probe.accepted_statuses(), &[200]);
    }

    #[test]
    fn curl_probe_defaults() {
        let probe = CurlProbe::default();
        assert_eq!(probe.accepted_statuses(), &[200, 304]);
        assert!(!probe.follow_redirects);
    }
}
