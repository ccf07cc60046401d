use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntiPatternKind {
    Duplication,
    LowQuality,
    Organization,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A structural quality issue across the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntiPattern {
    pub kind: AntiPatternKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    /// IDs of affected records. Sampled for the broad anti-patterns.
    pub affected_ids: Vec<String>,
}
