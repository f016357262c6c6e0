// # HTTP Transport (reqwest)
//
// This crate provides the production `HttpTransport` implementation for
// registrar adapters, backed by `reqwest`.
//
// ## Behavior
//
// - One POST per call, URL-encoded form body, no retries
// - 30-second request timeout
// - TLS peer and hostname verification stay at reqwest defaults; they are
//   never disabled, sandbox endpoints included
// - Non-2xx statuses are transport failures, not payloads: registrar
//   adapters only ever see the body of a successful response

use async_trait::async_trait;
use registrar_core::traits::HttpTransport;
use registrar_core::{Error, Result};
use std::time::Duration;

/// Default HTTP timeout for registrar API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed HTTP transport
///
/// Build one per process and share it across adapters; the underlying
/// client pools connections.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new transport with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a new transport with an explicit request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        tracing::debug!(url, "POST");

        let response = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        // Treat non-2xx as a transport-level failure
        let response = response
            .error_for_status()
            .map_err(|e| Error::transport(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_construction() {
        assert!(ReqwestTransport::new().is_ok());
        assert!(ReqwestTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_transport_error() {
        // Reserved TEST-NET-1 address, nothing listens there
        let transport = ReqwestTransport::with_timeout(Duration::from_millis(200)).unwrap();
        let err = transport
            .post_form("http://192.0.2.1/api/call", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
