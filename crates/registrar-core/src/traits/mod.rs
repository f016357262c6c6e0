//! Core traits for the registrar adapter system
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`RegistrarAdapter`]: The uniform domain-registration interface
//! - [`HttpTransport`]: The injected HTTP transport capability

pub mod registrar_adapter;
pub mod transport;

pub use registrar_adapter::{RegistrarAdapter, RegistrarAdapterFactory};
pub use transport::HttpTransport;
