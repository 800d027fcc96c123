//! Urgency scoring from support category and customer sentiment

use crate::types::SupportTeam;

/// Points contributed by the support category.
///
/// Money or goods in flight score 3, presales and account questions 2,
/// loyalty and feedback 1. Unknown categories contribute nothing.
#[must_use]
pub fn category_points(category: &str) -> u32 {
    match SupportTeam::parse(category) {
        Some(
            SupportTeam::ShippingAndDelivery
            | SupportTeam::ReturnsAndExchanges
            | SupportTeam::ClaimsAndDefects
            | SupportTeam::PaymentAndBilling,
        ) => 3,
        Some(
            SupportTeam::ProductConsultation
            | SupportTeam::OrderSupport
            | SupportTeam::TechnicalAssistance
            | SupportTeam::CustomerAccount,
        ) => 2,
        Some(SupportTeam::LoyaltyAndDiscounts | SupportTeam::FeedbackAndComplaints) => 1,
        None => 0,
    }
}

/// Points contributed by the sentiment label
#[must_use]
pub fn sentiment_points(sentiment: &str) -> u32 {
    match sentiment {
        "Very unhappy" => 2,
        "Unhappy" => 1,
        _ => 0,
    }
}

/// Urgency score for an email: category points plus sentiment points.
///
/// Accepts any input; values outside the known vocabularies score zero.
/// With the current tables the result lies in `0..=5`.
#[must_use]
pub fn score(category: &str, sentiment: &str) -> u32 {
    category_points(category) + sentiment_points(sentiment)
}
