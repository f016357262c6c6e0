//! Plugin-based adapter registry
//!
//! The registry allows registrar adapters to be registered dynamically at
//! runtime, avoiding hardcoded if-else chains over registrar names.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registrar_core::registry::AdapterRegistry;
//! use registrar_core::config::AdapterConfig;
//!
//! // Create a registry
//! let registry = AdapterRegistry::new();
//!
//! // Register adapters
//! registry.register_adapter("centralnic", Box::new(centralnic_factory));
//!
//! // Create an adapter from config
//! let config = AdapterConfig::CentralNic { /* ... */ };
//! let adapter = registry.create_adapter(&config, transport)?;
//! ```
//!
//! ## Registration
//!
//! Adapter crates should register themselves during initialization:
//!
//! ```rust,ignore
//! // In registrar-centralnic crate
//! pub fn register(registry: &AdapterRegistry) {
//!     registry.register_adapter("centralnic", Box::new(CentralNicFactory));
//! }
//! ```

use crate::config::AdapterConfig;
use crate::error::{Error, Result};
use crate::traits::{HttpTransport, RegistrarAdapter, RegistrarAdapterFactory};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Adapter registry for plugin-based registrar adapter creation
///
/// The registry maintains a map of adapter type names to factory objects,
/// allowing dynamic instantiation of adapters based on configuration.
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes.
#[derive(Default)]
pub struct AdapterRegistry {
    /// Registered adapter factories
    adapters: RwLock<HashMap<String, Box<dyn RegistrarAdapterFactory>>>,
}

impl AdapterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a registrar adapter factory
    ///
    /// # Parameters
    ///
    /// - `name`: Adapter type name (e.g., "centralnic", "namecheap")
    /// - `factory`: Factory object for creating adapter instances
    pub fn register_adapter(
        &self,
        name: impl Into<String>,
        factory: Box<dyn RegistrarAdapterFactory>,
    ) {
        let name = name.into();
        tracing::debug!(adapter = %name, "registering registrar adapter");
        let mut adapters = self.adapters.write().unwrap();
        adapters.insert(name, factory);
    }

    /// Create a registrar adapter from configuration
    ///
    /// # Parameters
    ///
    /// - `config`: Adapter configuration
    /// - `transport`: HTTP transport capability handed to the adapter
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn RegistrarAdapter>)`: Created adapter instance
    /// - `Err(Error)`: If the adapter type is not registered or creation fails
    pub fn create_adapter(
        &self,
        config: &AdapterConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Box<dyn RegistrarAdapter>> {
        let adapter_type = config.type_name();
        let adapters = self.adapters.read().unwrap();

        let factory = adapters
            .get(adapter_type)
            .ok_or_else(|| Error::config(format!("Unknown adapter type: {}", adapter_type)))?;

        factory.create(config, transport)
    }

    /// List all registered adapter types
    pub fn list_adapters(&self) -> Vec<String> {
        let adapters = self.adapters.read().unwrap();
        adapters.keys().cloned().collect()
    }

    /// Check if an adapter type is registered
    pub fn has_adapter(&self, name: &str) -> bool {
        let adapters = self.adapters.read().unwrap();
        adapters.contains_key(name)
    }
}
