//! # Error Types
//!
//! Defines `MocksmithError`, the unified error enum for every failure mode in
//! the generation pipeline. Every variant carries enough context (field path,
//! computed totals, configured ceilings) to debug a rejected schema without
//! digging through logs.

use thiserror::Error;

/// All errors that can occur in MockSmith operations.
#[derive(Error, Debug)]
pub enum MocksmithError {
    #[error("Schema validation failed at '{path}': {message}")]
    SchemaValidation { path: String, message: String },

    #[error("Schema declares {total} fields, which exceeds the limit of {limit}.\n  Count includes every nested field inside 'object' and 'array' descriptors.\n  Split the request into smaller schemas or raise max_fields in mocksmith.toml.")]
    FieldLimitExceeded { total: usize, limit: usize },

    #[error("Request would generate {combined} items ({per_record} per record x {records} records), which exceeds the limit of {limit}.\n  Reduce the record count or the array sizes, or raise max_projected_items in mocksmith.toml.")]
    ItemLimitExceeded {
        per_record: usize,
        records: usize,
        combined: usize,
        limit: usize,
    },

    #[error("Generation failed at '{path}': {message}")]
    Generation { path: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MocksmithError {
    /// Shorthand for a path-qualified validation error.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        MocksmithError::SchemaValidation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a path-qualified generation error.
    pub fn generation(path: impl Into<String>, message: impl Into<String>) -> Self {
        MocksmithError::Generation {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MocksmithError>;
