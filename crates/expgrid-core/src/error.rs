use thiserror::Error;

/// Core error type shared across expgrid crates.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The record shape violates declaration rules.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    /// A record was asked about a field its shape does not declare.
    #[error("unknown field: {field}")]
    UnknownField { field: String },
    /// A value could not be converted into the field's Rust type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

/// Convenience alias for results returned by expgrid crates.
pub type Result<T> = std::result::Result<T, Error>;
