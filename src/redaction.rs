//! PII redaction: regex rules first, then named entities

use crate::config::{CompiledRule, TriageConfig};
use crate::error::Result;
use crate::services::EntityRecognizer;
use regex::NoExpand;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, warn};

/// A labelled span reported by a named-entity recognizer.
///
/// Offsets are UTF-8 byte offsets into the text given to the recognizer,
/// half-open `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl EntitySpan {
    #[must_use]
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Non-empty, in bounds and on char boundaries of `text`
    #[must_use]
    pub fn fits(&self, text: &str) -> bool {
        self.start < self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }
}

/// Apply every rule once over the whole text, in order.
///
/// Later rules see the output of earlier ones.
#[must_use]
pub fn redact_patterns(text: &str, rules: &[CompiledRule]) -> String {
    let mut redacted = text.to_string();

    for rule in rules {
        if let Cow::Owned(replaced) = rule
            .regex
            .replace_all(&redacted, NoExpand(&rule.replacement))
        {
            debug!(rule = %rule.name, "Redacted pattern matches");
            redacted = replaced;
        }
    }

    redacted
}

/// Replace entity spans whose label is in `labels` with `placeholder`.
///
/// Spans are spliced from the highest start offset down so that offsets of
/// spans still to be processed stay valid. Overlapping spans are merged and
/// their union replaced once. Spans that do not fit the text are skipped.
#[must_use]
pub fn redact_entities<L: AsRef<str>>(
    text: &str,
    spans: &[EntitySpan],
    labels: &[L],
    placeholder: &str,
) -> String {
    let mut selected: Vec<&EntitySpan> = spans
        .iter()
        .filter(|span| labels.iter().any(|l| l.as_ref() == span.label))
        .filter(|span| {
            let fits = span.fits(text);
            if !fits {
                warn!(
                    start = span.start,
                    end = span.end,
                    label = %span.label,
                    "Skipping entity span outside text"
                );
            }
            fits
        })
        .collect();
    selected.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut redacted = text.to_string();
    let mut pending: Option<(usize, usize)> = None;

    for span in selected {
        pending = match pending {
            Some((start, end)) if span.end > start => {
                debug!(start = span.start, end = span.end, "Merging overlapping entity span");
                Some((span.start, end.max(span.end)))
            }
            Some((start, end)) => {
                redacted.replace_range(start..end, placeholder);
                Some((span.start, span.end))
            }
            None => Some((span.start, span.end)),
        };
    }
    if let Some((start, end)) = pending {
        redacted.replace_range(start..end, placeholder);
    }

    redacted
}

/// Compiled redaction settings
#[derive(Debug, Clone)]
pub struct Redactor {
    rules: Vec<CompiledRule>,
    entity_labels: Vec<String>,
    placeholder: String,
}

impl Redactor {
    pub fn new(config: &TriageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules: config.compile_rules()?,
            entity_labels: config.entity_labels.clone(),
            placeholder: config.placeholder.clone(),
        })
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[must_use]
    pub fn entity_labels(&self) -> &[String] {
        &self.entity_labels
    }

    /// Regex stage only
    #[must_use]
    pub fn redact_patterns(&self, text: &str) -> String {
        redact_patterns(text, &self.rules)
    }

    /// Full redaction: pattern rules, then entities found by `recognizer` in
    /// the pattern-redacted text. Recognizer errors are returned as-is.
    pub fn redact<R>(&self, text: &str, recognizer: &R) -> std::result::Result<String, R::Error>
    where
        R: EntityRecognizer + ?Sized,
    {
        let scrubbed = self.redact_patterns(text);
        let spans = recognizer.recognize(&scrubbed)?;
        debug!(spans = spans.len(), "Entity recognizer returned spans");
        Ok(redact_entities(
            &scrubbed,
            &spans,
            &self.entity_labels,
            &self.placeholder,
        ))
    }
}
