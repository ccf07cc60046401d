use lore_core::config::AnalysisConfig;
use lore_core::models::{
    Cluster, FrequencyAnalysis, Insight, InsightData, InsightKind, Priority, TagCount, Trend,
};
use lore_core::record::KnowledgeRecord;
use tracing::{debug, instrument};

const THEME_TITLE_CHARS: usize = 50;
const ERROR_TITLE_CHARS: usize = 60;
const THEME_TAGS: usize = 5;
const DESCRIBED_TAGS: usize = 3;

/// Derive insights, most urgent first. Insights of equal priority keep the
/// order in which their rules ran.
#[instrument(skip_all, fields(clusters = clusters.len(), records = records.len()))]
pub fn generate_insights(
    clusters: &[Cluster],
    frequency: &FrequencyAnalysis,
    records: &[KnowledgeRecord],
    config: &AnalysisConfig,
) -> Vec<Insight> {
    let mut insights: Vec<Insight> = clusters
        .iter()
        .filter(|c| c.size >= config.theme_cluster_size)
        .map(theme)
        .collect();

    insights.extend(recurring_error(frequency, config));
    insights.extend(growth(frequency));
    insights.extend(low_confidence(frequency, config));
    insights.extend(unused(records, config));
    insights.extend(frequent_tags(clusters, frequency, config));

    insights.sort_by_key(|i| i.priority);
    debug!(insights = insights.len(), "insight generation complete");
    insights
}

fn preview(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

fn theme(cluster: &Cluster) -> Insight {
    Insight {
        kind: InsightKind::Cluster,
        priority: Priority::High,
        title: format!(
            "Common theme detected: {}...",
            preview(&cluster.centroid.content, THEME_TITLE_CHARS)
        ),
        description: format!(
            "Found {} related entries with {:.0}% avg confidence",
            cluster.size,
            cluster.avg_confidence * 100.0
        ),
        recommendation: "Consider creating a reusable pattern or abstraction for this common theme"
            .into(),
        data: InsightData::Cluster {
            cluster_size: cluster.size,
            kinds: cluster.kinds.clone(),
            tags: cluster.tags.iter().take(THEME_TAGS).cloned().collect(),
        },
    }
}

fn recurring_error(frequency: &FrequencyAnalysis, config: &AnalysisConfig) -> Option<Insight> {
    let top = frequency.error_patterns.first()?;
    if top.count < config.recurring_error_count {
        return None;
    }
    Some(Insight {
        kind: InsightKind::Error,
        priority: Priority::Critical,
        title: format!("Recurring error: {}...", preview(&top.pattern, ERROR_TITLE_CHARS)),
        description: format!("This error has occurred {} times", top.count),
        recommendation: "Investigate root cause and implement permanent fix".into(),
        data: InsightData::RecurringError {
            count: top.count,
            first_seen: top.first_seen,
            last_seen: top.last_seen,
        },
    })
}

fn growth(frequency: &FrequencyAnalysis) -> Option<Insight> {
    let temporal = &frequency.temporal;
    if temporal.trend != Trend::Increasing {
        return None;
    }
    Some(Insight {
        kind: InsightKind::Trend,
        priority: Priority::Medium,
        title: "Knowledge base growing rapidly".into(),
        description: format!(
            "{} entries added in last 7 days ({:.1}/day average)",
            temporal.last_7_days, temporal.avg_per_day
        ),
        recommendation: "Consider organizing knowledge with more tags and categories".into(),
        data: InsightData::Growth(temporal.clone()),
    })
}

fn low_confidence(frequency: &FrequencyAnalysis, config: &AnalysisConfig) -> Option<Insight> {
    let lowest = frequency
        .confidence_by_kind
        .iter()
        .filter(|s| s.avg < config.low_confidence_average)
        .min_by(|a, b| a.avg.total_cmp(&b.avg))?;
    Some(Insight {
        kind: InsightKind::Quality,
        priority: Priority::Medium,
        title: format!("Low confidence in {} entries", lowest.kind),
        description: format!(
            "Average confidence only {:.0}% for {} {} entries",
            lowest.avg * 100.0,
            lowest.count,
            lowest.kind
        ),
        recommendation: "Review and verify these entries, or remove unreliable knowledge".into(),
        data: InsightData::LowConfidence(lowest.clone()),
    })
}

fn unused(records: &[KnowledgeRecord], config: &AnalysisConfig) -> Option<Insight> {
    let total = records.len();
    let unused = records.iter().filter(|r| r.access_count == 0).count();
    if total == 0 || unused as f64 <= total as f64 * config.unused_ratio {
        return None;
    }
    let percentage = unused as f64 / total as f64 * 100.0;
    Some(Insight {
        kind: InsightKind::Usage,
        priority: Priority::Low,
        title: "Many entries never accessed".into(),
        description: format!(
            "{unused} of {total} entries ({percentage:.0}%) have never been accessed"
        ),
        recommendation: "Consider archiving or improving discoverability of unused knowledge"
            .into(),
        data: InsightData::Usage {
            unused_count: unused,
            total_count: total,
            percentage,
        },
    })
}

/// Cluster tags that are frequent across the whole collection.
fn frequent_tags(
    clusters: &[Cluster],
    frequency: &FrequencyAnalysis,
    config: &AnalysisConfig,
) -> Option<Insight> {
    let mut tags: Vec<String> = Vec::new();
    for tag in clusters.iter().flat_map(|c| c.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }

    let common: Vec<TagCount> = tags
        .into_iter()
        .filter_map(|tag| {
            let count = frequency.tag_frequency.get(&tag).copied().unwrap_or(0);
            (count >= config.frequent_tag_count).then_some(TagCount { tag, count })
        })
        .collect();
    if common.is_empty() {
        return None;
    }

    let described: Vec<&str> = common
        .iter()
        .take(DESCRIBED_TAGS)
        .map(|t| t.tag.as_str())
        .collect();
    Some(Insight {
        kind: InsightKind::Organization,
        priority: Priority::Low,
        title: "Frequently used tags detected".into(),
        description: format!(
            "Tags {} are used frequently across clusters",
            described.join(", ")
        ),
        recommendation: "Consider creating dedicated categories for these common themes".into(),
        data: InsightData::Tags {
            tags: common.iter().map(|t| t.tag.clone()).collect(),
            frequencies: common,
        },
    })
}
