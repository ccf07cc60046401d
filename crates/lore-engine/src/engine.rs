//! QualityEngine — orchestrates the quality passes over an `IKnowledgeStore`.

use lore_consolidation::{cluster_records, summarize_all};
use lore_core::config::{ClusterOptions, DetectionOptions, LoreConfig};
use lore_core::errors::LoreResult;
use lore_core::models::{
    AntiPattern, AutoResolveSummary, Cluster, CollectionStats, ContradictionCandidate,
    ContradictionReport, FrequencyAnalysis, InsightReport, InsightSummary, PotentialConflict,
    Priority, Resolution, SupersededRecord, TagSuggestion,
};
use lore_core::traits::IKnowledgeStore;
use lore_learning::PatternMiner;
use lore_observability::{
    analysis_span, clustering_span, contradiction_span, insights_span, resolution_span,
};
use lore_validation::{self as validation, ContradictionDetector};
use tokio::sync::Mutex;
use tracing::{debug, info, Instrument};

/// The knowledge quality engine.
///
/// Generic over the store so that in-process stores are called without
/// dynamic dispatch. Batch resolution runs are serialized per engine: two
/// overlapping runs would otherwise both penalize the same loser.
pub struct QualityEngine<S: IKnowledgeStore> {
    store: S,
    config: LoreConfig,
    miner: PatternMiner,
    detector: ContradictionDetector,
    resolve_guard: Mutex<()>,
}

impl<S: IKnowledgeStore> QualityEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, LoreConfig::default())
    }

    /// Build with explicit config. The config is expected to be validated
    /// already (`LoreConfig::from_toml` does this).
    pub fn with_config(store: S, config: LoreConfig) -> Self {
        Self {
            store,
            miner: PatternMiner::new(config.analysis.clone()),
            config,
            detector: ContradictionDetector::new(),
            resolve_guard: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &LoreConfig {
        &self.config
    }

    /// Detection options from the `[contradiction]` section.
    pub fn default_detection_options(&self) -> DetectionOptions {
        self.config.contradiction.detection_options()
    }

    /// Cluster options from the `[clustering]` section.
    pub fn default_cluster_options(&self) -> ClusterOptions {
        self.config.clustering
    }

    // ── Contradictions ─────────────────────────────────────────────────

    pub async fn detect_contradictions(
        &self,
        options: &DetectionOptions,
    ) -> LoreResult<ContradictionReport> {
        let records = self.store.fetch_all().await?;
        let _span = contradiction_span!(records.len()).entered();
        let contradictions = self.detector.detect(&records, options);
        info!(
            records = records.len(),
            contradictions = contradictions.len(),
            "contradiction detection complete"
        );
        Ok(ContradictionReport { contradictions })
    }

    /// Supersede the loser of one candidate. Fails with `RecordNotFound` if
    /// either record is gone. Serialized with batch runs.
    pub async fn resolve_contradiction(
        &self,
        candidate: &ContradictionCandidate,
    ) -> LoreResult<Resolution> {
        let _guard = self.resolve_guard.lock().await;
        validation::resolve_one(&self.store, candidate)
            .instrument(resolution_span!(candidate.winner, candidate.loser))
            .await
    }

    /// Detect and resolve everything in one batch. Runs on the same engine
    /// are serialized.
    pub async fn auto_resolve_contradictions(
        &self,
        options: &DetectionOptions,
    ) -> LoreResult<AutoResolveSummary> {
        let _guard = self.resolve_guard.lock().await;
        validation::auto_resolve(&self.store, options)
            .instrument(resolution_span!())
            .await
    }

    pub async fn superseded_history(&self) -> LoreResult<Vec<SupersededRecord>> {
        let records = self.store.fetch_all().await?;
        let history = validation::superseded_history(&records);
        debug!(superseded = history.len(), "superseded history loaded");
        Ok(history)
    }

    /// Existing live records a new record would closely match. `threshold`
    /// defaults to `[contradiction].conflict_threshold`.
    pub async fn find_potential_conflicts(
        &self,
        content: &str,
        embedding: &[f32],
        threshold: Option<f64>,
    ) -> LoreResult<Vec<PotentialConflict>> {
        let threshold = threshold.unwrap_or(self.config.contradiction.conflict_threshold);
        let records = self.store.fetch_all().await?;
        let conflicts = validation::find_conflicts(&records, embedding, threshold);
        debug!(
            content_len = content.len(),
            threshold,
            conflicts = conflicts.len(),
            "potential conflict check complete"
        );
        Ok(conflicts)
    }

    /// Ids from `id` to the record that currently supersedes it.
    pub async fn supersession_chain(&self, id: &str) -> LoreResult<Vec<String>> {
        let records = self.store.fetch_all().await?;
        validation::supersession_chain(&records, id)
    }

    // ── Clustering and analysis ────────────────────────────────────────

    pub async fn cluster_knowledge(&self, options: &ClusterOptions) -> LoreResult<Vec<Cluster>> {
        let records = self.store.fetch_all().await?;
        let _span = clustering_span!(records.len()).entered();
        let clusters = cluster_records(&records, options);
        info!(clusters = clusters.len(), "clustering complete");
        Ok(clusters)
    }

    /// Frequency analysis over every record, superseded ones included.
    pub async fn analyze_patterns(&self) -> LoreResult<FrequencyAnalysis> {
        let records = self.store.fetch_all().await?;
        let _span = analysis_span!(records.len()).entered();
        Ok(self.miner.analyze_frequency(&records))
    }

    /// Full report: insights, anti-patterns, tag suggestions, cluster
    /// summaries and headline counts.
    pub async fn generate_insights(&self, options: &ClusterOptions) -> LoreResult<InsightReport> {
        let records = self.store.fetch_all().await?;
        let _span = insights_span!(records.len()).entered();

        let clusters = cluster_records(&records, options);
        let frequency = self.miner.analyze_frequency(&records);
        let insights = self.miner.generate_insights(&clusters, &frequency, &records);
        let anti_patterns = self.miner.detect_anti_patterns(&records);
        let tag_suggestions = self.miner.suggest_tags(&clusters);

        let summary = InsightSummary {
            total_insights: insights.len(),
            critical_insights: insights
                .iter()
                .filter(|i| i.priority == Priority::Critical)
                .count(),
            anti_patterns_found: anti_patterns.len(),
            clusters_detected: clusters.len(),
            tag_suggestions_count: tag_suggestions.len(),
        };
        info!(
            insights = summary.total_insights,
            critical = summary.critical_insights,
            anti_patterns = summary.anti_patterns_found,
            clusters = summary.clusters_detected,
            "insight report generated"
        );

        Ok(InsightReport {
            insights,
            anti_patterns,
            tag_suggestions,
            clusters: summarize_all(&clusters),
            summary,
        })
    }

    pub async fn detect_anti_patterns(&self) -> LoreResult<Vec<AntiPattern>> {
        let records = self.store.fetch_all().await?;
        let _span = analysis_span!(records.len()).entered();
        Ok(self.miner.detect_anti_patterns(&records))
    }

    pub async fn suggest_tags(&self, options: &ClusterOptions) -> LoreResult<Vec<TagSuggestion>> {
        let records = self.store.fetch_all().await?;
        let _span = clustering_span!(records.len()).entered();
        let clusters = cluster_records(&records, options);
        Ok(self.miner.suggest_tags(&clusters))
    }

    pub async fn collection_stats(&self) -> LoreResult<CollectionStats> {
        let records = self.store.fetch_all().await?;
        Ok(self.miner.collection_stats(&records))
    }
}
