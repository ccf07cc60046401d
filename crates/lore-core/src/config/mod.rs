mod analysis_config;
mod clustering_config;
mod contradiction_config;
pub mod defaults;
mod observability_config;

pub use analysis_config::AnalysisConfig;
pub use clustering_config::ClusterOptions;
pub use contradiction_config::{ContradictionConfig, DetectionOptions};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{LoreError, LoreResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoreConfig {
    pub contradiction: ContradictionConfig,
    pub clustering: ClusterOptions,
    pub analysis: AnalysisConfig,
    pub observability: ObservabilityConfig,
}

impl LoreConfig {
    /// Parse from TOML. Missing sections and fields take their defaults;
    /// out-of-range values are rejected.
    pub fn from_toml(s: &str) -> LoreResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every option against its documented range.
    pub fn validate(&self) -> LoreResult<()> {
        self.contradiction.validate()?;
        self.clustering.validate()?;
        self.analysis.validate()?;
        Ok(())
    }
}

/// `value` must lie in (0, 1].
pub(crate) fn check_threshold(field: &str, value: f64) -> LoreResult<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(LoreError::invalid_option(
            field,
            format!("{value} is outside (0, 1]"),
        ))
    }
}

/// `value` must lie in [0, 1].
pub(crate) fn check_unit(field: &str, value: f64) -> LoreResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LoreError::invalid_option(
            field,
            format!("{value} is outside [0, 1]"),
        ))
    }
}

/// `value` must be at least 1.
pub(crate) fn check_positive(field: &str, value: usize) -> LoreResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(LoreError::invalid_option(field, "must be at least 1"))
    }
}
