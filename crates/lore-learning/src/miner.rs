//! PatternMiner: the analysis passes bound to one set of thresholds.

use lore_core::config::AnalysisConfig;
use lore_core::models::{
    AntiPattern, Cluster, CollectionStats, FrequencyAnalysis, Insight, TagSuggestion,
};
use lore_core::record::KnowledgeRecord;

use crate::{analysis, anti_patterns, insights, stats, tags};

#[derive(Debug, Clone, Default)]
pub struct PatternMiner {
    config: AnalysisConfig,
}

impl PatternMiner {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze_frequency(&self, records: &[KnowledgeRecord]) -> FrequencyAnalysis {
        analysis::analyze_frequency(records)
    }

    pub fn generate_insights(
        &self,
        clusters: &[Cluster],
        frequency: &FrequencyAnalysis,
        records: &[KnowledgeRecord],
    ) -> Vec<Insight> {
        insights::generate_insights(clusters, frequency, records, &self.config)
    }

    pub fn detect_anti_patterns(&self, records: &[KnowledgeRecord]) -> Vec<AntiPattern> {
        anti_patterns::detect_anti_patterns(records, &self.config)
    }

    /// Suggestions for clusters of at least the configured size.
    pub fn suggest_tags(&self, clusters: &[Cluster]) -> Vec<TagSuggestion> {
        tags::suggest_tags(clusters, self.config.tag_suggestion_min_cluster_size)
    }

    pub fn collection_stats(&self, records: &[KnowledgeRecord]) -> CollectionStats {
        stats::collection_stats(records)
    }
}
