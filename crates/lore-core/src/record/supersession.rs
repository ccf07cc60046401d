use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// Present on a record once it has lost a contradiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supersession {
    /// ID of the record that won.
    pub superseded_by: String,
    pub superseded_at: DateTime<Utc>,
    /// Human-readable reason carried over from the contradiction.
    pub reason: String,
    /// Confidence before the resolution penalty was applied.
    pub original_confidence: Confidence,
}

/// One entry in a winner's append-only audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupersedesEntry {
    /// ID of the record this one superseded.
    pub id: String,
    pub reason: String,
    pub resolved_at: DateTime<Utc>,
}
