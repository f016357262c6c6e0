// # Registrar Adapter Trait
//
// Defines the uniform domain-registration interface every registrar adapter
// implements. Adapters are interchangeable peers selected at runtime by
// configuration, not by type hierarchy.
//
// ## Implementations
//
// - CentralNic (RRPproxy): `registrar-centralnic` crate
// - Future: Namecheap, OpenSRS, ResellerClub, etc.
//
// ## Responsibility boundaries
//
// Adapters translate between the platform's domain/contact model and one
// registrar's wire protocol. They are stateless between calls: no caching of
// contact ids, auth tokens, or session state. Every failure propagates to
// the caller unchanged; retry policy is not an adapter concern.

use crate::descriptor::AdapterDescriptor;
use crate::domain::Domain;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for registrar adapter implementations
///
/// Boolean-returning operations report whether the registrar acknowledged
/// the change; a registrar-side rejection surfaces as `Error::Api` rather
/// than `Ok(false)`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. The adapter itself holds no
/// mutable state; concurrent use is bounded only by the injected transport.
#[async_trait]
pub trait RegistrarAdapter: Send + Sync {
    /// Check whether a domain is available for registration
    ///
    /// A well-formed "not available" response is a legitimate negative
    /// result (`Ok(false)`), not an error.
    async fn is_domain_available(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Check whether a domain is eligible for transfer to this registrar
    async fn can_be_transferred(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Register the domain for its registration period
    ///
    /// Submits the domain's contact first; if the contact submission fails,
    /// no registration attempt is made.
    async fn register_domain(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Renew the domain for its renewal period
    async fn renew_domain(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Replace the domain's nameserver delegation
    async fn modify_ns(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Replace the domain's contacts with a fresh submission of its contact
    async fn modify_contact(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Fetch registrar-side details, writing `domain.expiration_time`
    /// when the registrar reports an expiration date
    async fn domain_details(&self, domain: &mut Domain) -> Result<(), crate::Error>;

    /// Transfer the domain in, using its EPP/auth code
    async fn transfer_domain(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Fetch the EPP/auth transfer-away code, if the registrar returns one
    async fn auth_code(&self, domain: &Domain) -> Result<Option<String>, crate::Error>;

    /// Enable the registrar transfer lock
    async fn lock(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Disable the registrar transfer lock
    async fn unlock(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Enable WHOIS privacy protection
    async fn enable_privacy_protection(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Disable WHOIS privacy protection
    async fn disable_privacy_protection(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Delete the domain at the registrar
    ///
    /// Registrars that do not support registrar-side deletion must fail with
    /// `Error::Unsupported` without issuing any network call.
    async fn delete_domain(&self, domain: &Domain) -> Result<bool, crate::Error>;

    /// Get the adapter name (for logging/debugging)
    fn adapter_name(&self) -> &'static str;

    /// Get the static admin-form descriptor for this adapter
    fn descriptor(&self) -> AdapterDescriptor;
}

/// Helper trait for constructing registrar adapters from configuration
pub trait RegistrarAdapterFactory: Send + Sync {
    /// Create a RegistrarAdapter instance from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Configuration specific to this adapter
    /// - `transport`: The HTTP transport capability the adapter will use
    ///
    /// # Returns
    ///
    /// A boxed RegistrarAdapter trait object, or `Error::Config` when the
    /// configuration is missing required fields
    fn create(
        &self,
        config: &crate::config::AdapterConfig,
        transport: Arc<dyn super::HttpTransport>,
    ) -> Result<Box<dyn RegistrarAdapter>, crate::Error>;
}
