//! Review status vocabulary and homework record parsing

use serde_json::Value;

use crate::{BotError, Result};

/// Review states the API is allowed to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse the wire representation, returning None for anything outside
    /// the known vocabulary
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict for the notification text
    pub fn verdict(self) -> &'static str {
        match self {
            ReviewStatus::Approved => {
                "The work has been reviewed: the reviewer liked everything. Hooray!"
            }
            ReviewStatus::Reviewing => "The work has been taken up for review.",
            ReviewStatus::Rejected => {
                "The work has been reviewed: the reviewer has some remarks."
            }
        }
    }
}

/// Build the notification text for a single homework record.
///
/// The status field is checked against the vocabulary before the name
/// field is looked at, so an unknown status wins over a missing name.
pub fn parse_status(homework: &Value) -> Result<String> {
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let review = ReviewStatus::parse(status)
        .ok_or_else(|| BotError::UnsupportedStatus(status.to_string()))?;

    let name = homework
        .get("name")
        .and_then(Value::as_str)
        .ok_or(BotError::MissingField("name"))?;

    Ok(format!(
        "Changed status of review for \"{}\". {}",
        name,
        review.verdict()
    ))
}
