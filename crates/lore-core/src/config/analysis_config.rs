use serde::{Deserialize, Serialize};

use super::{check_positive, check_unit, defaults};
use crate::errors::LoreResult;

/// Thresholds for insight, anti-pattern, and tag suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Clusters at least this large become a "common theme" insight.
    pub theme_cluster_size: usize,
    /// The top error pattern becomes critical at this many occurrences.
    pub recurring_error_count: usize,
    /// Kinds averaging below this confidence are reported.
    pub low_confidence_average: f64,
    /// Share of never-accessed records above which usage is reported.
    pub unused_ratio: f64,
    /// Cluster tags used at least this often collection-wide are reported.
    pub frequent_tag_count: usize,
    /// Records below this confidence count as low quality.
    pub low_quality_confidence: f64,
    /// Share of low-quality records above which the anti-pattern fires.
    pub low_quality_ratio: f64,
    /// Share of untagged records above which the anti-pattern fires.
    pub untagged_ratio: f64,
    /// Share of errors without a linked solution above which the anti-pattern fires.
    pub unresolved_error_ratio: f64,
    /// Clusters smaller than this get no tag suggestion.
    pub tag_suggestion_min_cluster_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            theme_cluster_size: defaults::DEFAULT_THEME_CLUSTER_SIZE,
            recurring_error_count: defaults::DEFAULT_RECURRING_ERROR_COUNT,
            low_confidence_average: defaults::DEFAULT_LOW_CONFIDENCE_AVERAGE,
            unused_ratio: defaults::DEFAULT_UNUSED_RATIO,
            frequent_tag_count: defaults::DEFAULT_FREQUENT_TAG_COUNT,
            low_quality_confidence: defaults::DEFAULT_LOW_QUALITY_CONFIDENCE,
            low_quality_ratio: defaults::DEFAULT_LOW_QUALITY_RATIO,
            untagged_ratio: defaults::DEFAULT_UNTAGGED_RATIO,
            unresolved_error_ratio: defaults::DEFAULT_UNRESOLVED_ERROR_RATIO,
            tag_suggestion_min_cluster_size: defaults::DEFAULT_TAG_SUGGESTION_MIN_CLUSTER_SIZE,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> LoreResult<()> {
        check_positive("theme_cluster_size", self.theme_cluster_size)?;
        check_positive("recurring_error_count", self.recurring_error_count)?;
        check_unit("low_confidence_average", self.low_confidence_average)?;
        check_unit("unused_ratio", self.unused_ratio)?;
        check_positive("frequent_tag_count", self.frequent_tag_count)?;
        check_unit("low_quality_confidence", self.low_quality_confidence)?;
        check_unit("low_quality_ratio", self.low_quality_ratio)?;
        check_unit("untagged_ratio", self.untagged_ratio)?;
        check_unit("unresolved_error_ratio", self.unresolved_error_ratio)?;
        check_positive(
            "tag_suggestion_min_cluster_size",
            self.tag_suggestion_min_cluster_size,
        )
    }
}
