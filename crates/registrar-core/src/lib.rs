// # registrar-core
//
// Core library for the registrar adapter system.
//
// ## Architecture Overview
//
// This library provides the platform-side contract for domain registrars:
// - **RegistrarAdapter**: Trait for the uniform domain-registration interface
// - **HttpTransport**: Trait for the injected HTTP transport capability
// - **AdapterRegistry**: Plugin-based registry for registrar adapters
// - **Domain / Contact**: Value objects owned by the calling platform
//
// ## Design Principles
//
// 1. **Interchangeable adapters**: Every registrar implements the same trait
//    and is selected at runtime by configuration, not by type hierarchy
// 2. **Injected transport**: Adapters receive their HTTP capability at
//    construction, enabling test doubles
// 3. **Fail fast, propagate everything**: No retries, no swallowed errors;
//    every failure surfaces at the call site
// 4. **Stateless adapters**: No caching of contact ids, tokens, or sessions
//    between calls

pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod registry;
pub mod traits;

// Re-export core types for convenience
pub use config::AdapterConfig;
pub use descriptor::{AdapterDescriptor, FieldKind, FormField};
pub use domain::{Contact, Domain, NAMESERVER_SLOTS};
pub use error::{Error, Result};
pub use registry::AdapterRegistry;
pub use traits::{HttpTransport, RegistrarAdapter, RegistrarAdapterFactory};
