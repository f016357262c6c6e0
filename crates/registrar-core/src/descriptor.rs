//! Admin-facing adapter metadata
//!
//! Each adapter exposes a static descriptor with a display label and the
//! configuration form fields the admin UI should render. This is metadata
//! only; nothing here affects wire behavior.

use serde::Serialize;

/// Static adapter descriptor: label plus the admin configuration form
#[derive(Debug, Clone, Serialize)]
pub struct AdapterDescriptor {
    /// Display label (e.g. "CentralNic (RRPproxy)")
    pub label: &'static str,
    /// Configuration form fields, in display order
    pub form: Vec<FormField>,
}

/// A single admin configuration form field
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    /// Configuration key the field maps to
    pub name: &'static str,
    /// Widget kind
    pub kind: FieldKind,
    /// Display label
    pub label: &'static str,
    /// Help text shown next to the field
    pub description: &'static str,
}

/// Form widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Plain text input
    Text,
    /// Masked password input
    Password,
    /// Boolean checkbox
    Checkbox,
}
