//! CentralNic (RRPproxy) API client
//!
//! Builds authenticated requests against the registrar's HTTP endpoint,
//! serializes parameters, deserializes the JSON envelope, and classifies the
//! outcome. Single attempt per call, fail fast; retry policy is owned by the
//! caller.
//!
//! Every request carries the `command`, the account credentials
//! (`s_login`/`s_pw`), and `output_format=json`. Every response is a flat
//! JSON object with at least a `code` and optionally a `description`.

use registrar_core::traits::HttpTransport;
use registrar_core::{Error, Result};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Production API endpoint
pub const PRODUCTION_API_BASE: &str = "https://api.rrpproxy.net/api/call";

/// OT&E (sandbox) API endpoint
pub const SANDBOX_API_BASE: &str = "https://api-ote.rrpproxy.net/api/call";

/// Parameter names injected by the client; caller-supplied values for these
/// keys are discarded so credentials can never be overridden
const INJECTED_KEYS: [&str; 4] = ["command", "s_login", "s_pw", "output_format"];

/// The JSON object returned by every API call
pub type Envelope = Map<String, Value>;

/// Authenticated CentralNic API client
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the password.
pub struct CentralNicApi {
    /// RRPproxy account username
    username: String,

    /// RRPproxy account password
    /// ⚠️ NEVER log this value
    password: String,

    /// Target the OT&E system instead of production
    sandbox: bool,

    /// Injected HTTP transport capability
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for CentralNicApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CentralNicApi")
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("sandbox", &self.sandbox)
            .finish()
    }
}

impl CentralNicApi {
    /// Create a new API client over the given transport
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        sandbox: bool,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            sandbox,
            transport,
        }
    }

    /// The endpoint selected by the sandbox flag
    pub fn api_base(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_API_BASE
        } else {
            PRODUCTION_API_BASE
        }
    }

    /// Issue one API command and return the parsed envelope
    ///
    /// # Errors
    ///
    /// - `Error::Transport`: connection, TLS, or HTTP-status failure, with
    ///   the underlying transport message embedded
    /// - `Error::InvalidResponse`: body was not a JSON object; carries the
    ///   raw body text
    /// - `Error::Api`: envelope `code` missing or not 200; carries the
    ///   registrar's `description` when present
    pub async fn call(&self, command: &str, params: Vec<(&str, String)>) -> Result<Envelope> {
        let mut body: Vec<(String, String)> = params
            .into_iter()
            .filter(|(key, _)| !INJECTED_KEYS.contains(key))
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        body.push(("command".to_string(), command.to_string()));
        body.push(("s_login".to_string(), self.username.clone()));
        body.push(("s_pw".to_string(), self.password.clone()));
        body.push(("output_format".to_string(), "json".to_string()));

        tracing::debug!(command, sandbox = self.sandbox, "CentralNic API call");

        let raw = self
            .transport
            .post_form(self.api_base(), &body)
            .await
            .map_err(|e| Error::transport(format!("CentralNic API connection error: {}", e)))?;

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(_) => return Err(Error::invalid_response(raw)),
        };

        let envelope = match parsed {
            Value::Object(map) => map,
            _ => return Err(Error::invalid_response(raw)),
        };

        if !code_is_success(envelope.get("code")) {
            let message = envelope
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("Unknown CentralNic API error");
            return Err(Error::api(message));
        }

        Ok(envelope)
    }
}

/// Loose success check on the envelope `code`
///
/// The upstream emits `code` as a JSON number or a numeric string depending
/// on the command; both forms compare equal to 200.
pub fn code_is_success(code: Option<&Value>) -> bool {
    match code {
        Some(Value::Number(n)) => n.as_i64() == Some(200),
        Some(Value::String(s)) => s.trim().parse::<i64>() == Ok(200),
        _ => false,
    }
}
