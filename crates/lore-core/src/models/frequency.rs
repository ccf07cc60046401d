use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::KnowledgeKind;

/// Records that share a normalized content prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPattern {
    /// Content of the first record seen with this prefix.
    pub pattern: String,
    pub count: usize,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub avg_confidence: f64,
    /// IDs of every record in the group.
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
}

/// Record creation counts over trailing windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalPatterns {
    pub last_7_days: usize,
    pub last_30_days: usize,
    pub last_90_days: usize,
    /// Daily average over the last 30 days.
    pub avg_per_day: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceStats {
    pub kind: KnowledgeKind,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Frequency statistics over the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyAnalysis {
    pub error_patterns: Vec<ContentPattern>,
    pub decision_patterns: Vec<ContentPattern>,
    pub tag_frequency: BTreeMap<String, usize>,
    pub kind_distribution: BTreeMap<KnowledgeKind, usize>,
    pub temporal: TemporalPatterns,
    /// One entry per kind present, in kind order.
    pub confidence_by_kind: Vec<ConfidenceStats>,
}
