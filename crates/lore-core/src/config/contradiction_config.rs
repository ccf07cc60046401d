use serde::{Deserialize, Serialize};

use super::{check_threshold, check_unit, defaults};
use crate::errors::LoreResult;

/// Per-call options for contradiction detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionOptions {
    /// Minimum cosine similarity for a pair to count as the same statement.
    pub similarity_threshold: f64,
    /// Minimum confidence gap for a pair to count as a disagreement.
    pub min_confidence_delta: f64,
    /// Only compare records of the same kind.
    pub same_kind_only: bool,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: defaults::DEFAULT_CONTRADICTION_SIMILARITY,
            min_confidence_delta: defaults::DEFAULT_MIN_CONFIDENCE_DELTA,
            same_kind_only: defaults::DEFAULT_SAME_KIND_ONLY,
        }
    }
}

impl DetectionOptions {
    pub fn validate(&self) -> LoreResult<()> {
        check_threshold("similarity_threshold", self.similarity_threshold)?;
        check_unit("min_confidence_delta", self.min_confidence_delta)
    }
}

/// `[contradiction]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContradictionConfig {
    pub similarity_threshold: f64,
    pub min_confidence_delta: f64,
    pub same_kind_only: bool,
    /// Similarity at which a not-yet-stored record conflicts with an existing one.
    pub conflict_threshold: f64,
}

impl Default for ContradictionConfig {
    fn default() -> Self {
        let detection = DetectionOptions::default();
        Self {
            similarity_threshold: detection.similarity_threshold,
            min_confidence_delta: detection.min_confidence_delta,
            same_kind_only: detection.same_kind_only,
            conflict_threshold: defaults::DEFAULT_CONFLICT_THRESHOLD,
        }
    }
}

impl ContradictionConfig {
    pub fn detection_options(&self) -> DetectionOptions {
        DetectionOptions {
            similarity_threshold: self.similarity_threshold,
            min_confidence_delta: self.min_confidence_delta,
            same_kind_only: self.same_kind_only,
        }
    }

    pub fn validate(&self) -> LoreResult<()> {
        self.detection_options().validate()?;
        check_threshold("conflict_threshold", self.conflict_threshold)
    }
}
