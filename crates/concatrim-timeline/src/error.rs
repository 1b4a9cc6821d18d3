//! Error types for concatrim-timeline.

use crate::Span;
use thiserror::Error;

/// Result type for concatrim-timeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for span registration and mapper configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The mapper was configured with an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A span is malformed (negative bound, start after end, or unparsable).
    #[error("invalid span: {0}")]
    InvalidSpan(String),

    /// A span collides with one that is already registered.
    #[error("span {span} overlaps existing span {existing}")]
    OverlappingSpan { span: Span, existing: Span },
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create an invalid span error.
    pub fn invalid_span(msg: impl Into<String>) -> Self {
        Self::InvalidSpan(msg.into())
    }
}
