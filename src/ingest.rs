//! Turning inbound mail into pipeline input

use crate::error::{Result, TriageError};
use crate::types::EmailAddress;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Subject used when a message has none
pub const NO_SUBJECT: &str = "(no subject)";

/// One email waiting to be triaged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEmail {
    /// Sender address as it will be shown to staff
    pub sender: String,

    /// Full text in the form `Subject: ...\n\n<body>`
    pub text: String,
}

impl InboundEmail {
    /// Build input from a separate subject and body
    #[must_use]
    pub fn from_sample(subject: &str, body: &str, sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: format!("Subject: {}\n\n{}", subject.trim(), body.trim()),
        }
    }

    /// Parse a raw RFC 5322 message
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let parsed = mailparse::parse_mail(raw).map_err(|e| TriageError::Parse(e.to_string()))?;

        let from_header = header_value(&parsed.headers, "from")
            .ok_or_else(|| TriageError::MissingSender("no From header".into()))?;
        let sender = EmailAddress::parse(&from_header)
            .ok_or_else(|| TriageError::MissingSender(from_header.clone()))?;

        let subject =
            header_value(&parsed.headers, "subject").unwrap_or_else(|| NO_SUBJECT.to_string());
        let body = extract_body(&parsed);

        debug!("Ingested message: {} from {}", subject, sender.address);

        Ok(Self::from_sample(&subject, &body, sender.address))
    }
}

#[derive(Debug, Deserialize)]
struct SampleEmail {
    subject: String,
    body: String,
    #[serde(default)]
    sender: Option<String>,
}

/// Load a JSON array of `{subject, body, sender?}` samples.
///
/// Samples without a sender get a random `@example.com` address.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<InboundEmail>> {
    let raw = std::fs::read_to_string(path)?;
    let samples: Vec<SampleEmail> = serde_json::from_str(&raw)?;

    Ok(samples
        .into_iter()
        .map(|s| {
            let sender = s
                .sender
                .unwrap_or_else(|| format!("{}@example.com", Uuid::new_v4().simple()));
            InboundEmail::from_sample(&s.subject, &s.body, sender)
        })
        .collect())
}

fn header_value(headers: &[mailparse::MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(mailparse::MailHeader::get_value)
}

/// First text/plain part, else the first text/html part stripped of markup
fn extract_body(parsed: &mailparse::ParsedMail) -> String {
    let mut text = None;
    let mut html = None;
    collect_parts(parsed, &mut text, &mut html);

    text.or_else(|| html.as_deref().map(strip_html))
        .unwrap_or_default()
}

fn collect_parts(
    part: &mailparse::ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) {
    if !part.subparts.is_empty() {
        for sub in &part.subparts {
            collect_parts(sub, text, html);
        }
        return;
    }

    let mimetype = part.ctype.mimetype.to_lowercase();
    let Ok(body) = part.get_body() else {
        return;
    };

    if mimetype.contains("text/html") {
        if html.is_none() {
            *html = Some(body);
        }
    } else if mimetype.contains("text/plain") && text.is_none() {
        *text = Some(body);
    }
}

fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut tag = String::new();
    let mut skipping = false;

    for c in html.chars() {
        match c {
            '<' if !in_tag => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag.trim().to_lowercase();
                if name.starts_with("script") || name.starts_with("style") {
                    skipping = true;
                } else if name.starts_with("/script") || name.starts_with("/style") {
                    skipping = false;
                } else if ["br", "/p", "/div", "/li", "/h"]
                    .iter()
                    .any(|t| name.starts_with(t))
                {
                    result.push('\n');
                }
            }
            _ if in_tag => tag.push(c),
            _ if !skipping => result.push(c),
            _ => {}
        }
    }

    let decoded = result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
