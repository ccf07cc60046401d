use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::anti_pattern::AntiPattern;
use super::cluster::ClusterSummary;
use super::frequency::{ConfidenceStats, TemporalPatterns};
use super::tag_suggestion::TagSuggestion;
use crate::record::KnowledgeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Cluster,
    Error,
    Trend,
    Quality,
    Usage,
    Organization,
}

/// Ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Structured evidence attached to an insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsightData {
    Cluster {
        cluster_size: usize,
        kinds: BTreeSet<KnowledgeKind>,
        tags: Vec<String>,
    },
    RecurringError {
        count: usize,
        first_seen: DateTime<Utc>,
        last_seen: DateTime<Utc>,
    },
    Growth(TemporalPatterns),
    LowConfidence(ConfidenceStats),
    Usage {
        unused_count: usize,
        total_count: usize,
        percentage: f64,
    },
    Tags {
        tags: Vec<String>,
        frequencies: Vec<TagCount>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub data: InsightData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightSummary {
    pub total_insights: usize,
    pub critical_insights: usize,
    pub anti_patterns_found: usize,
    pub clusters_detected: usize,
    pub tag_suggestions_count: usize,
}

/// Everything the insight pass produces in one call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightReport {
    pub insights: Vec<Insight>,
    pub anti_patterns: Vec<AntiPattern>,
    pub tag_suggestions: Vec<TagSuggestion>,
    pub clusters: Vec<ClusterSummary>,
    pub summary: InsightSummary,
}
