//! Error types for value serialization and structuring.

use thiserror::Error;

/// Errors that can occur while serializing or structuring a value tree.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The host handed over a value whose type has no counterpart in the
    /// closed value set. Carries the host's type name.
    #[error("Unsupported sass variable type '{type_name}'")]
    UnsupportedValueType { type_name: String },

    /// Lists or maps nested deeper than the configured limit.
    #[error("Value nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },

    /// Converting a structured value into `serde_json::Value` failed.
    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout sass-extract-core.
pub type Result<T> = std::result::Result<T, ExtractError>;
