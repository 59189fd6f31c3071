//! Error types for field parsing and rendering
//!
//! Building a descriptor never fails. These errors only come from turning
//! text into a data bag or from rendering a field set.

use thiserror::Error;

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while parsing input or rendering output
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Input document parsed, but its top level is not a mapping
    #[error("expected a mapping of field attributes, found {found}")]
    NotAnObject { found: String },

    /// Field kind name not recognized
    #[error("unknown field kind: {name}")]
    UnknownFieldKind { name: String },

    /// Output format name not recognized
    #[error("unknown output format: {name}")]
    UnknownOutputFormat { name: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
