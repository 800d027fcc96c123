//! Seams for the external AI/NLP services the pipeline delegates to
//!
//! The crate ships no clients; callers implement these for whatever
//! provider they use.

use crate::error::ServiceError;
use crate::redaction::EntitySpan;
use crate::sentiment::SentimentScores;
use async_trait::async_trait;

/// Named-entity recognition over plain text
pub trait EntityRecognizer: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Spans found in `text`, byte offsets into `text`
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, Self::Error>;
}

/// Picks the support team responsible for an email
#[async_trait]
pub trait SupportClassifier: Send + Sync {
    /// Returns a team name; see [`SupportTeam`](crate::SupportTeam) for the
    /// expected vocabulary
    async fn classify(&self, redacted_text: &str) -> Result<String, ServiceError>;
}

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<SentimentScores, ServiceError>;
}

/// Writes a reply draft for staff to review
#[async_trait]
pub trait DraftWriter: Send + Sync {
    async fn draft_reply(&self, redacted_text: &str) -> Result<String, ServiceError>;
}
