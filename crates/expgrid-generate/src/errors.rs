use thiserror::Error;

/// Errors emitted while templating or exporting experiments.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The record declaration or template instance is misused.
    #[error("usage error: {0}")]
    Usage(String),
    /// Declared syntax that is recognized but not implemented.
    #[error("unsupported feature: {0}")]
    Unsupported(String),
    #[error("cannot parse '{token}' as {kind} for field '{field}'")]
    Parse {
        field: String,
        token: String,
        kind: String,
    },
    /// Expansion produced a record count different from the domain product.
    #[error("internal invariant violated: expected {expected} records but generated {actual}")]
    Invariant { expected: usize, actual: usize },
    #[error(transparent)]
    Core(#[from] expgrid_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
