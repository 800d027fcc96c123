//! Error types for email triage

use thiserror::Error;

/// Boxed error returned by an external service implementation
pub type ServiceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while triaging emails
#[derive(Error, Debug)]
pub enum TriageError {
    /// A configured redaction pattern failed to compile
    #[error("Invalid redaction pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration is structurally valid JSON but semantically unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a raw inbound message
    #[error("Failed to parse message: {0}")]
    Parse(String),

    /// Inbound message has no usable sender address
    #[error("Missing or unparseable sender: {0}")]
    MissingSender(String),

    /// Named-entity recognition failed
    #[error("Entity recognition failed: {0}")]
    EntityRecognition(#[source] ServiceError),

    /// Support category classification failed
    #[error("Classification failed: {0}")]
    Classification(#[source] ServiceError),

    /// Sentiment analysis failed
    #[error("Sentiment analysis failed: {0}")]
    Sentiment(#[source] ServiceError),

    /// Draft reply generation failed
    #[error("Draft generation failed: {0}")]
    Draft(#[source] ServiceError),
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;
