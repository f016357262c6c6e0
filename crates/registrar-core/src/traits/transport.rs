// # HTTP Transport Trait
//
// Defines the transport capability injected into registrar adapters.
//
// Adapters never build their own HTTP clients; the transport is provided at
// construction time so tests can substitute doubles and the application can
// share one client across adapters.
//
// ## Requirements for implementations
//
// - One request per call, no retries (failure policy is owned by the caller)
// - TLS peer and hostname verification must stay enabled, sandbox included
// - Non-2xx responses are transport failures, not payloads

use async_trait::async_trait;

/// Trait for the HTTP transport capability used by registrar adapters
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a single HTTP POST with a URL-encoded form body
    ///
    /// # Parameters
    ///
    /// - `url`: The absolute endpoint URL
    /// - `params`: Form parameters, sent in order
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The response body text for a 2xx response
    /// - `Err(Error)`: Transport-level failure (connection, TLS, timeout,
    ///   or a non-2xx status)
    async fn post_form(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, crate::Error>;
}
