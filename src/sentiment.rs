//! Sentiment labels derived from analyzer scores

use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer mood, from most to least upset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    #[serde(rename = "Very unhappy")]
    VeryUnhappy,
    #[serde(rename = "Unhappy")]
    Unhappy,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Happy")]
    Happy,
    #[serde(rename = "Very Happy")]
    VeryHappy,
}

impl SentimentLabel {
    /// Bucket a document or sentence score in `-1.0..=1.0`
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score <= -0.35 {
            Self::VeryUnhappy
        } else if score <= -0.1 {
            Self::Unhappy
        } else if score < 0.25 {
            Self::Neutral
        } else if score < 0.75 {
            Self::Happy
        } else {
            Self::VeryHappy
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VeryUnhappy => "Very unhappy",
            Self::Unhappy => "Unhappy",
            Self::Neutral => "Neutral",
            Self::Happy => "Happy",
            Self::VeryHappy => "Very Happy",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw scores as returned by a sentiment service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentScores {
    pub score: f32,
    pub magnitude: f32,

    /// Detected language (e.g. "en")
    pub language: String,

    pub sentences: Vec<SentenceScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentenceScore {
    pub text: String,
    pub score: f32,
    pub magnitude: f32,
}

/// Labelled sentiment for a whole email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentReport {
    pub label: SentimentLabel,
    pub score: f32,
    pub magnitude: f32,
    pub language: String,
    pub sentences: Vec<SentenceSentiment>,
}

/// Labelled sentiment for one sentence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentenceSentiment {
    pub text: String,
    pub score: f32,
    pub magnitude: f32,
    pub label: SentimentLabel,
}

impl From<SentimentScores> for SentimentReport {
    fn from(scores: SentimentScores) -> Self {
        Self {
            label: SentimentLabel::from_score(scores.score),
            score: scores.score,
            magnitude: scores.magnitude,
            language: scores.language,
            sentences: scores
                .sentences
                .into_iter()
                .map(|s| SentenceSentiment {
                    label: SentimentLabel::from_score(s.score),
                    text: s.text,
                    score: s.score,
                    magnitude: s.magnitude,
                })
                .collect(),
        }
    }
}
