/// Confidence removed from a record when it loses a contradiction.
pub const SUPERSESSION_PENALTY: f64 = 0.3;

/// Resolution never drives a loser's confidence below this floor.
pub const SUPERSESSION_CONFIDENCE_FLOOR: f64 = 0.1;

/// Similarity above which two records read as the same statement.
pub const NEARLY_IDENTICAL_SIMILARITY: f64 = 0.95;

/// Similarity above which two records read as the same topic.
pub const HIGHLY_SIMILAR_SIMILARITY: f64 = 0.85;

/// Confidence gap above which a disagreement is called large.
pub const LARGE_CONFIDENCE_DELTA: f64 = 0.3;

/// Confidence gap above which a disagreement is called moderate.
pub const MODERATE_CONFIDENCE_DELTA: f64 = 0.1;
