//! Span definitions per operation: contradiction, resolution, clustering, analysis, insights.

/// Create a contradiction detection span.
#[macro_export]
macro_rules! contradiction_span {
    ($record_count:expr) => {
        tracing::info_span!("lore.contradiction", record_count = $record_count)
    };
}

/// Create a resolution span.
#[macro_export]
macro_rules! resolution_span {
    ($winner:expr, $loser:expr) => {
        tracing::info_span!("lore.resolution", winner = %$winner, loser = %$loser)
    };
    () => {
        tracing::info_span!("lore.resolution", batch = true)
    };
}

/// Create a clustering span.
#[macro_export]
macro_rules! clustering_span {
    ($record_count:expr) => {
        tracing::info_span!("lore.clustering", record_count = $record_count)
    };
}

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($record_count:expr) => {
        tracing::info_span!("lore.analysis", record_count = $record_count)
    };
}

/// Create an insights span.
#[macro_export]
macro_rules! insights_span {
    ($record_count:expr) => {
        tracing::info_span!("lore.insights", record_count = $record_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CONTRADICTION: &str = "lore.contradiction";
    pub const RESOLUTION: &str = "lore.resolution";
    pub const CLUSTERING: &str = "lore.clustering";
    pub const ANALYSIS: &str = "lore.analysis";
    pub const INSIGHTS: &str = "lore.insights";
}
