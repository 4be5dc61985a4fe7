//! Value types flowing into and out of the generation engine.

use serde::{Deserialize, Serialize};

/// Trip metadata supplied by the user. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripInputs {
    pub name: String,
    /// `YYYY-MM-DD` or empty.
    pub start_date: String,
    /// `YYYY-MM-DD` or empty.
    pub end_date: String,
    pub reason: String,
    pub backup: String,
    /// Free-form extra context. Only the AI prompt reads this.
    pub notes: String,
}

/// A finished subject line and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub subject: String,
    pub body: String,
}
