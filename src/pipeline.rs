//! The triage workflow: redact, classify, score, draft

use crate::config::{TraceSettings, TriageConfig};
use crate::error::{Result, TriageError};
use crate::ingest::{InboundEmail, NO_SUBJECT};
use crate::redaction::Redactor;
use crate::sentiment::SentimentReport;
use crate::services::{DraftWriter, EntityRecognizer, SentimentAnalyzer, SupportClassifier};
use crate::types::{EmailRecord, SupportTeam};
use crate::urgency;
use chrono::{DurationRound, TimeDelta, Utc};
use futures::future::join_all;
use regex::Regex;
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

static SUBJECT_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)Subject:\s*([^\n]*)").unwrap());

/// Subject taken from the first `Subject:` line of `text`
#[must_use]
pub fn derive_subject(text: &str) -> String {
    SUBJECT_REGEX
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_SUBJECT)
        .to_string()
}

/// Runs emails through redaction and the external services.
///
/// Every stage after redaction only ever sees redacted text.
pub struct TriagePipeline<R, C, S, D> {
    redactor: Redactor,
    trace: TraceSettings,
    recognizer: R,
    classifier: C,
    analyzer: S,
    writer: D,
}

impl<R, C, S, D> TriagePipeline<R, C, S, D>
where
    R: EntityRecognizer,
    C: SupportClassifier,
    S: SentimentAnalyzer,
    D: DraftWriter,
{
    pub fn new(
        config: &TriageConfig,
        recognizer: R,
        classifier: C,
        analyzer: S,
        writer: D,
    ) -> Result<Self> {
        Ok(Self {
            redactor: Redactor::new(config)?,
            trace: config.trace.clone(),
            recognizer,
            classifier,
            analyzer,
            writer,
        })
    }

    #[must_use]
    pub const fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Trace metadata recorded on every `triage_email` span
    #[must_use]
    pub const fn trace(&self) -> &TraceSettings {
        &self.trace
    }

    /// Redact `text` with this pipeline's rules and recognizer
    pub fn redact(&self, text: &str) -> Result<String> {
        self.redactor
            .redact(text, &self.recognizer)
            .map_err(|e| TriageError::EntityRecognition(Box::new(e)))
    }

    /// Triage a single email into a fresh, unanswered record.
    ///
    /// Each call is one traced run; its id is recorded on the span and on
    /// the record.
    pub async fn process(&self, email: &InboundEmail) -> Result<EmailRecord> {
        let trace_id = Uuid::new_v4();
        let span = info_span!(
            "triage_email",
            project = self.trace.project.as_deref().unwrap_or("default"),
            endpoint = self.trace.endpoint.as_deref(),
            %trace_id,
            sender = %email.sender
        );

        self.run(email, trace_id).instrument(span).await
    }

    /// Triage emails concurrently; results come back in input order
    pub async fn process_batch(&self, emails: &[InboundEmail]) -> Vec<Result<EmailRecord>> {
        debug!(count = emails.len(), "Processing batch");
        join_all(emails.iter().map(|email| self.process(email))).await
    }

    async fn run(&self, email: &InboundEmail, trace_id: Uuid) -> Result<EmailRecord> {
        let redacted_text = self.redact(&email.text)?;

        let support_team = self
            .classifier
            .classify(&redacted_text)
            .await
            .map_err(TriageError::Classification)?;
        if SupportTeam::parse(&support_team).is_none() {
            warn!(team = %support_team, "Classifier returned an unknown support team");
        }

        let sentiment: SentimentReport = self
            .analyzer
            .analyze(&redacted_text)
            .await
            .map_err(TriageError::Sentiment)?
            .into();

        let urgency = urgency::score(&support_team, sentiment.label.as_str());

        let draft_reply = self
            .writer
            .draft_reply(&redacted_text)
            .await
            .map_err(TriageError::Draft)?;

        let subject = derive_subject(&redacted_text);
        debug!(%subject, %support_team, urgency, "Triaged email");

        let now = Utc::now();
        Ok(EmailRecord {
            id: Uuid::new_v4(),
            processed_at: now.duration_trunc(TimeDelta::minutes(1)).unwrap_or(now),
            sender: email.sender.clone(),
            subject,
            original_text: email.text.clone(),
            redacted_text,
            support_team,
            sentiment: sentiment.label,
            sentiment_score: sentiment.score,
            sentiment_magnitude: sentiment.magnitude,
            urgency,
            draft_reply,
            answered: false,
            trace_id,
        })
    }
}
