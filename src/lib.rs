// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

//! Customer-Support Email Triage
//!
//! Strips personal data from inbound support emails, routes them to a team,
//! scores sentiment and urgency, and attaches a draft reply for staff review.
//!
//! # Features
//!
//! - Regex redaction of emails, phone numbers, card numbers and order IDs
//! - Named-entity redaction with reverse-offset splicing
//! - Deterministic urgency scoring from category and sentiment tables
//! - Pluggable classifier, sentiment and drafting services
//! - JSON-backed review board for the support dashboard
//!
//! # Example
//!
//! ```rust
//! use support_triage::{TriageConfig, Redactor, urgency};
//!
//! let redactor = Redactor::new(&TriageConfig::default()).unwrap();
//! let text = redactor.redact_patterns("Reach me at jane@example.com about ORD-1234567");
//! assert_eq!(text, "Reach me at [REDACTED] about [REDACTED]");
//!
//! assert_eq!(urgency::score("Claims and Product Defects", "Very unhappy"), 5);
//! ```

mod config;
mod error;
mod ingest;
mod pipeline;
mod redaction;
mod review;
mod sentiment;
mod services;
mod types;
pub mod urgency;

pub use config::*;
pub use error::{Result, ServiceError, TriageError};
pub use ingest::{InboundEmail, NO_SUBJECT, load_samples};
pub use pipeline::{TriagePipeline, derive_subject};
pub use redaction::*;
pub use review::ReviewBoard;
pub use sentiment::*;
pub use services::*;
pub use types::*;
