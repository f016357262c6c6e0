// # CentralNic (RRPproxy) Registrar Adapter
//
// This crate provides the CentralNic adapter for the registrar system.
//
// The adapter speaks RRPproxy's HTTP/JSON protocol: one POST per command to
// `https://api.rrpproxy.net/api/call` (or the OT&E endpoint in sandbox
// mode), URL-encoded form body, flat JSON envelope with a `code` and
// optional `description`.
//
// ## What the adapter does
//
// - Availability and transfer-eligibility checks
// - Registration, renewal, inbound transfer
// - Nameserver and contact modification
// - Transfer lock and WHOIS privacy toggles
// - Expiry lookup (writes `Domain::expiration_time`)
// - Auth-code retrieval
//
// ## What it deliberately does not do
//
// - Registrar-side deletion: RRPproxy has no delete command, so
//   `delete_domain` always fails with `Error::Unsupported` and issues no
//   network call
// - Retries, backoff, rate limiting, caching: failure policy and state are
//   owned by the calling platform
//
// ## API Reference
//
// - RRPproxy HTTP API: https://wiki.rrpproxy.net/api

pub mod adapter;
pub mod api;

pub use adapter::CentralNicAdapter;
pub use api::{CentralNicApi, Envelope, PRODUCTION_API_BASE, SANDBOX_API_BASE};

use registrar_core::config::AdapterConfig;
use registrar_core::traits::{HttpTransport, RegistrarAdapter, RegistrarAdapterFactory};
use registrar_core::{Error, Result};
use std::sync::Arc;

/// Factory for creating CentralNic adapters
pub struct CentralNicFactory;

impl RegistrarAdapterFactory for CentralNicFactory {
    fn create(
        &self,
        config: &AdapterConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Box<dyn RegistrarAdapter>> {
        match config {
            AdapterConfig::CentralNic {
                username,
                password,
                sandbox,
            } => {
                config.validate()?;

                if *sandbox {
                    tracing::warn!("CentralNic adapter targeting the OT&E (sandbox) system");
                }

                let adapter = CentralNicAdapter::new(username, password, *sandbox, transport)?;
                Ok(Box::new(adapter))
            }
            _ => Err(Error::config("Invalid config for CentralNic adapter")),
        }
    }
}

/// Register the CentralNic adapter with a registry
///
/// This function should be called during initialization to make the
/// CentralNic adapter available.
///
/// # Example
///
/// ```rust
/// use registrar_core::AdapterRegistry;
///
/// let registry = AdapterRegistry::new();
/// registrar_centralnic::register(&registry);
/// assert!(registry.has_adapter("centralnic"));
/// ```
pub fn register(registry: &registrar_core::AdapterRegistry) {
    registry.register_adapter("centralnic", Box::new(CentralNicFactory));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopTransport;

    #[async_trait::async_trait]
    impl HttpTransport for NoopTransport {
        async fn post_form(&self, _url: &str, _params: &[(String, String)]) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_factory_creation() {
        let factory = CentralNicFactory;

        let config = AdapterConfig::CentralNic {
            username: "user".to_string(),
            password: "secret".to_string(),
            sandbox: false,
        };

        let adapter = factory.create(&config, Arc::new(NoopTransport));
        assert!(adapter.is_ok());
        assert_eq!(adapter.unwrap().adapter_name(), "centralnic");
    }

    #[test]
    fn test_factory_missing_username() {
        let factory = CentralNicFactory;

        let config = AdapterConfig::CentralNic {
            username: String::new(),
            password: "secret".to_string(),
            sandbox: false,
        };

        let err = factory
            .create(&config, Arc::new(NoopTransport))
            .err()
            .unwrap();
        assert!(err.to_string().contains("missing API username"));
    }

    #[test]
    fn test_factory_missing_password() {
        let factory = CentralNicFactory;

        let config = AdapterConfig::CentralNic {
            username: "user".to_string(),
            password: String::new(),
            sandbox: true,
        };

        let err = factory
            .create(&config, Arc::new(NoopTransport))
            .err()
            .unwrap();
        assert!(err.to_string().contains("missing API password"));
    }

    #[test]
    fn test_register_with_registry() {
        let registry = registrar_core::AdapterRegistry::new();
        register(&registry);
        assert!(registry.has_adapter("centralnic"));
    }

    #[test]
    fn test_descriptor_metadata() {
        let adapter =
            CentralNicAdapter::new("user", "secret", false, Arc::new(NoopTransport)).unwrap();
        let descriptor = adapter.descriptor();

        assert_eq!(descriptor.label, "CentralNic (RRPproxy)");
        let names: Vec<&str> = descriptor.form.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["username", "password", "sandbox"]);
    }
}
