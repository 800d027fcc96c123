#![allow(dead_code)]

use async_trait::async_trait;
use std::convert::Infallible;
use std::fmt;
use support_triage::*;

/// Tags every occurrence of a known word with its label
pub struct DictionaryRecognizer {
    pub entries: Vec<(&'static str, &'static str)>,
}

impl DictionaryRecognizer {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }
}

impl EntityRecognizer for DictionaryRecognizer {
    type Error = Infallible;

    fn recognize(&self, text: &str) -> std::result::Result<Vec<EntitySpan>, Infallible> {
        let mut spans = Vec::new();
        for (word, label) in &self.entries {
            for (start, found) in text.match_indices(word) {
                spans.push(EntitySpan::new(start, start + found.len(), *label));
            }
        }
        Ok(spans)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ModelUnavailable;

impl fmt::Display for ModelUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NER model unavailable")
    }
}

impl std::error::Error for ModelUnavailable {}

pub struct FailingRecognizer;

impl EntityRecognizer for FailingRecognizer {
    type Error = ModelUnavailable;

    fn recognize(&self, _text: &str) -> std::result::Result<Vec<EntitySpan>, ModelUnavailable> {
        Err(ModelUnavailable)
    }
}

/// Always answers with the same team
pub struct FixedClassifier(pub &'static str);

#[async_trait]
impl SupportClassifier for FixedClassifier {
    async fn classify(&self, _redacted_text: &str) -> std::result::Result<String, ServiceError> {
        Ok(self.0.to_string())
    }
}

pub struct FailingClassifier;

#[async_trait]
impl SupportClassifier for FailingClassifier {
    async fn classify(&self, _redacted_text: &str) -> std::result::Result<String, ServiceError> {
        Err("quota exceeded".into())
    }
}

/// Scores every text the same, one sentence per line
pub struct FixedSentiment(pub f32);

#[async_trait]
impl SentimentAnalyzer for FixedSentiment {
    async fn analyze(&self, text: &str) -> std::result::Result<SentimentScores, ServiceError> {
        Ok(SentimentScores {
            score: self.0,
            magnitude: self.0.abs() * 2.0,
            language: "en".into(),
            sentences: text
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| SentenceScore {
                    text: l.to_string(),
                    score: self.0,
                    magnitude: self.0.abs(),
                })
                .collect(),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ServiceDown(pub &'static str);

impl fmt::Display for ServiceDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} service down", self.0)
    }
}

impl std::error::Error for ServiceDown {}

pub struct FailingAnalyzer;

#[async_trait]
impl SentimentAnalyzer for FailingAnalyzer {
    async fn analyze(&self, _text: &str) -> std::result::Result<SentimentScores, ServiceError> {
        Err(Box::new(ServiceDown("sentiment")))
    }
}

/// Drafts a reply that quotes the text it was given
pub struct EchoDraft;

#[async_trait]
impl DraftWriter for EchoDraft {
    async fn draft_reply(&self, redacted_text: &str) -> std::result::Result<String, ServiceError> {
        Ok(format!("Here is your reply.\nSubject: Re\n\n> {redacted_text}"))
    }
}

pub struct FailingDraft;

#[async_trait]
impl DraftWriter for FailingDraft {
    async fn draft_reply(&self, _redacted_text: &str) -> std::result::Result<String, ServiceError> {
        Err(Box::new(ServiceDown("drafting")))
    }
}

pub type StubPipeline =
    TriagePipeline<DictionaryRecognizer, FixedClassifier, FixedSentiment, EchoDraft>;

pub fn pipeline(team: &'static str, sentiment: f32) -> StubPipeline {
    TriagePipeline::new(
        &TriageConfig::default(),
        DictionaryRecognizer::new(&[("Alice", "PERSON"), ("Paris", "GPE")]),
        FixedClassifier(team),
        FixedSentiment(sentiment),
        EchoDraft,
    )
    .unwrap()
}

pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("support-triage-{}-{name}", uuid::Uuid::new_v4()))
}
