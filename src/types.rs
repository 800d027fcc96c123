//! Core types for triaged emails

use crate::sentiment::SentimentLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Display format of record timestamps (dd/mm/YYYY HH:MM)
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Serde adapter storing a timestamp as [`TIMESTAMP_FORMAT`] text.
///
/// Minute precision: seconds are lost on a round trip.
mod minute_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

/// A processed inbound email, as shown to support staff.
///
/// Everything is fixed at creation except the answered flag. Boards written
/// before records carried an `id` get a fresh one on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailRecord {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: Uuid,
    #[serde(rename = "timestamp", with = "minute_format")]
    pub(crate) processed_at: DateTime<Utc>,
    #[serde(rename = "email_address")]
    pub(crate) sender: String,
    pub(crate) subject: String,
    #[serde(rename = "original_email_text")]
    pub(crate) original_text: String,
    #[serde(rename = "redacted_email_text")]
    pub(crate) redacted_text: String,
    pub(crate) support_team: String,
    #[serde(rename = "sentiment_category")]
    pub(crate) sentiment: SentimentLabel,
    pub(crate) sentiment_score: f32,
    pub(crate) sentiment_magnitude: f32,
    pub(crate) urgency: u32,
    pub(crate) draft_reply: String,
    pub(crate) answered: bool,
    /// Id of the traced run that produced this record
    #[serde(default)]
    pub(crate) trace_id: Uuid,
}

impl EmailRecord {
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Processing time, to the minute
    #[must_use]
    pub const fn processed_at(&self) -> DateTime<Utc> {
        self.processed_at
    }

    #[must_use]
    pub const fn trace_id(&self) -> Uuid {
        self.trace_id
    }

    /// Processing time formatted for the dashboard
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.processed_at.format(TIMESTAMP_FORMAT).to_string()
    }

    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    #[must_use]
    pub fn redacted_text(&self) -> &str {
        &self.redacted_text
    }

    #[must_use]
    pub fn support_team(&self) -> &str {
        &self.support_team
    }

    #[must_use]
    pub const fn sentiment(&self) -> SentimentLabel {
        self.sentiment
    }

    #[must_use]
    pub const fn sentiment_score(&self) -> f32 {
        self.sentiment_score
    }

    #[must_use]
    pub const fn sentiment_magnitude(&self) -> f32 {
        self.sentiment_magnitude
    }

    #[must_use]
    pub const fn urgency(&self) -> u32 {
        self.urgency
    }

    #[must_use]
    pub fn draft_reply(&self) -> &str {
        &self.draft_reply
    }

    /// Draft with any model preamble before the first "Subject" dropped
    #[must_use]
    pub fn draft_for_display(&self) -> &str {
        self.draft_reply
            .find("Subject")
            .map_or(self.draft_reply.as_str(), |pos| &self.draft_reply[pos..])
    }

    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.answered
    }

    /// Staff action: the customer has been answered
    pub const fn mark_answered(&mut self) {
        self.answered = true;
    }
}

/// The support teams emails are routed to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SupportTeam {
    #[serde(rename = "Shipping and Delivery Updates")]
    ShippingAndDelivery,
    #[serde(rename = "Returns and Exchanges Management")]
    ReturnsAndExchanges,
    #[serde(rename = "Claims and Product Defects")]
    ClaimsAndDefects,
    #[serde(rename = "Payment and Billing Support")]
    PaymentAndBilling,
    #[serde(rename = "Product Consultation")]
    ProductConsultation,
    #[serde(rename = "Order Support")]
    OrderSupport,
    #[serde(rename = "Technical Assistance")]
    TechnicalAssistance,
    #[serde(rename = "Customer Account Support")]
    CustomerAccount,
    #[serde(rename = "Loyalty Programs and Discounts")]
    LoyaltyAndDiscounts,
    #[serde(rename = "Customer Feedback and Complaints")]
    FeedbackAndComplaints,
}

impl SupportTeam {
    pub const ALL: [Self; 10] = [
        Self::ShippingAndDelivery,
        Self::ReturnsAndExchanges,
        Self::ClaimsAndDefects,
        Self::PaymentAndBilling,
        Self::ProductConsultation,
        Self::OrderSupport,
        Self::TechnicalAssistance,
        Self::CustomerAccount,
        Self::LoyaltyAndDiscounts,
        Self::FeedbackAndComplaints,
    ];

    /// Exact, case-sensitive lookup by team name
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|team| team.as_str() == name)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShippingAndDelivery => "Shipping and Delivery Updates",
            Self::ReturnsAndExchanges => "Returns and Exchanges Management",
            Self::ClaimsAndDefects => "Claims and Product Defects",
            Self::PaymentAndBilling => "Payment and Billing Support",
            Self::ProductConsultation => "Product Consultation",
            Self::OrderSupport => "Order Support",
            Self::TechnicalAssistance => "Technical Assistance",
            Self::CustomerAccount => "Customer Account Support",
            Self::LoyaltyAndDiscounts => "Loyalty Programs and Discounts",
            Self::FeedbackAndComplaints => "Customer Feedback and Complaints",
        }
    }
}

impl fmt::Display for SupportTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sender address with optional display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    /// Display name (e.g., "John Doe")
    pub name: Option<String>,

    /// Bare address (e.g., "john@example.com")
    pub address: String,
}

impl EmailAddress {
    /// Parse `Name <local@domain>` or a bare `local@domain`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        let (name, address) = match (s.find('<'), s.rfind('>')) {
            (Some(start), Some(end)) if start < end => {
                let name = s[..start].trim().trim_matches('"');
                (
                    (!name.is_empty()).then(|| name.to_string()),
                    s[start + 1..end].trim(),
                )
            }
            _ => (None, s),
        };

        let (local, domain) = address.split_once('@')?;
        if local.is_empty() || domain.is_empty() || address.contains(char::is_whitespace) {
            return None;
        }

        Some(Self {
            name,
            address: address.to_string(),
        })
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        self.address.split_once('@').map_or("", |(_, d)| d)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}
