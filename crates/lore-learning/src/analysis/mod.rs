//! Frequency analysis: content prefixes, histograms, growth, confidence by kind.

pub mod prefix;
pub mod temporal;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use lore_core::models::{ConfidenceStats, FrequencyAnalysis};
use lore_core::record::{KnowledgeKind, KnowledgeRecord};
use tracing::{debug, instrument};

pub use prefix::{group_by_prefix, PATTERN_PREFIX_CHARS};
pub use temporal::temporal_patterns;

/// Maximum number of content patterns reported per kind.
pub const TOP_PATTERNS: usize = 10;

/// Analyze `records` as of now.
pub fn analyze_frequency(records: &[KnowledgeRecord]) -> FrequencyAnalysis {
    analyze_frequency_at(records, Utc::now())
}

/// Analyze `records` with the trailing windows anchored at `now`.
#[instrument(skip_all, fields(records = records.len()))]
pub fn analyze_frequency_at(records: &[KnowledgeRecord], now: DateTime<Utc>) -> FrequencyAnalysis {
    let error_patterns = group_by_prefix(records, KnowledgeKind::Error, TOP_PATTERNS);
    let decision_patterns = group_by_prefix(records, KnowledgeKind::Decision, TOP_PATTERNS);

    let mut tag_frequency: BTreeMap<String, usize> = BTreeMap::new();
    let mut kind_distribution: BTreeMap<KnowledgeKind, usize> = BTreeMap::new();
    for r in records {
        for tag in &r.tags {
            *tag_frequency.entry(tag.clone()).or_default() += 1;
        }
        *kind_distribution.entry(r.kind).or_default() += 1;
    }

    let analysis = FrequencyAnalysis {
        error_patterns,
        decision_patterns,
        tag_frequency,
        kind_distribution,
        temporal: temporal_patterns(records, now),
        confidence_by_kind: confidence_by_kind(records),
    };
    debug!(
        error_patterns = analysis.error_patterns.len(),
        decision_patterns = analysis.decision_patterns.len(),
        tags = analysis.tag_frequency.len(),
        "frequency analysis complete"
    );
    analysis
}

/// Per-kind confidence statistics, one entry per kind present, in kind order.
pub fn confidence_by_kind(records: &[KnowledgeRecord]) -> Vec<ConfidenceStats> {
    let mut by_kind: BTreeMap<KnowledgeKind, Vec<f64>> = BTreeMap::new();
    for r in records {
        by_kind.entry(r.kind).or_default().push(r.confidence.value());
    }
    by_kind
        .into_iter()
        .map(|(kind, values)| {
            let count = values.len();
            let avg = values.iter().sum::<f64>() / count as f64;
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            ConfidenceStats {
                kind,
                avg,
                min,
                max,
                count,
            }
        })
        .collect()
}
