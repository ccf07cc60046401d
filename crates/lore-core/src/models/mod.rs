pub mod anti_pattern;
pub mod cluster;
pub mod contradiction;
pub mod frequency;
pub mod insight;
pub mod resolution;
pub mod stats;
pub mod tag_suggestion;

pub use anti_pattern::{AntiPattern, AntiPatternKind, Severity};
pub use cluster::{CentroidSummary, Cluster, ClusterSummary};
pub use contradiction::{
    ConflictRecommendation, ContradictionCandidate, ContradictionReport, PotentialConflict,
};
pub use frequency::{ConfidenceStats, ContentPattern, FrequencyAnalysis, TemporalPatterns, Trend};
pub use insight::{Insight, InsightData, InsightKind, InsightReport, InsightSummary, Priority, TagCount};
pub use resolution::{
    AutoResolveSummary, RecordSummary, Resolution, ResolutionAction, ResolutionDetail,
    ResolutionFailure, SupersededRecord,
};
pub use stats::{CollectionStats, ConfidenceBands};
pub use tag_suggestion::TagSuggestion;
