//! Default values for every configuration field.

// Contradiction
pub const DEFAULT_CONTRADICTION_SIMILARITY: f64 = 0.85;
pub const DEFAULT_MIN_CONFIDENCE_DELTA: f64 = 0.1;
pub const DEFAULT_SAME_KIND_ONLY: bool = false;
pub const DEFAULT_CONFLICT_THRESHOLD: f64 = 0.85;

// Clustering
pub const DEFAULT_CLUSTER_SIMILARITY: f64 = 0.75;
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;
pub const DEFAULT_MAX_CLUSTERS: usize = 10;

// Analysis
pub const DEFAULT_THEME_CLUSTER_SIZE: usize = 5;
pub const DEFAULT_RECURRING_ERROR_COUNT: usize = 3;
pub const DEFAULT_LOW_CONFIDENCE_AVERAGE: f64 = 0.6;
pub const DEFAULT_UNUSED_RATIO: f64 = 0.3;
pub const DEFAULT_FREQUENT_TAG_COUNT: usize = 3;
pub const DEFAULT_LOW_QUALITY_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_LOW_QUALITY_RATIO: f64 = 0.2;
pub const DEFAULT_UNTAGGED_RATIO: f64 = 0.3;
pub const DEFAULT_UNRESOLVED_ERROR_RATIO: f64 = 0.5;
pub const DEFAULT_TAG_SUGGESTION_MIN_CLUSTER_SIZE: usize = 3;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
