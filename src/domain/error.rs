//! Error types for data generation

use thiserror::Error;

/// Errors that can occur while generating data for a schema
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    /// No generator is registered for the schema's type tag
    #[error("Unsupported schema type: '{0}'")]
    UnsupportedType(String),

    /// The generation context was cancelled
    #[error("Generation was cancelled")]
    Cancelled,

    /// The generation context deadline passed
    #[error("Generation deadline exceeded")]
    DeadlineExceeded,

    /// Examples are required by the active policy but the schema has none
    #[error("Example required but not present for schema of type '{0}'")]
    MissingExample(String),

    /// Media type carries neither a schema nor a usable example
    #[error("Media type has no schema")]
    MissingSchema,

    /// Schema constraints that cannot be satisfied
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Recursive generator is not wired to a top-level generator
    #[error("Schema generator is not available for nested generation")]
    GeneratorUnavailable,
}

impl GenerationError {
    /// True when the caller gave up, as opposed to a problem with the schema.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
