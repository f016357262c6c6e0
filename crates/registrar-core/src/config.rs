//! Configuration types for the registrar adapter system
//!
//! Adapter configuration is created once at construction time and never
//! mutated afterwards. Validation failures are configuration errors, raised
//! before any operation starts.

use serde::{Deserialize, Serialize};

/// Registrar adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdapterConfig {
    /// CentralNic (RRPproxy) adapter
    #[serde(rename = "centralnic")]
    CentralNic {
        /// RRPproxy account username
        username: String,
        /// RRPproxy account password
        password: String,
        /// Target the OT&E (testing) system instead of production
        #[serde(default)]
        sandbox: bool,
    },

    /// Custom adapter
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

impl AdapterConfig {
    /// Validate the adapter configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            AdapterConfig::CentralNic { username, password, .. } => {
                if username.is_empty() {
                    return Err(crate::Error::config(
                        "The CentralNic registrar is not fully configured: missing API username",
                    ));
                }
                if password.is_empty() {
                    return Err(crate::Error::config(
                        "The CentralNic registrar is not fully configured: missing API password",
                    ));
                }
                Ok(())
            }
            AdapterConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom adapter factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config("Custom adapter config cannot be null"));
                }
                Ok(())
            }
        }
    }

    /// Get the adapter type name used as the registry key
    pub fn type_name(&self) -> &str {
        match self {
            AdapterConfig::CentralNic { .. } => "centralnic",
            AdapterConfig::Custom { factory, .. } => factory,
        }
    }
}
