use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how much the collection trusts a record.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// High confidence threshold.
    pub const HIGH: f64 = 0.8;
    /// Medium confidence threshold. Records below this count as low quality.
    pub const MEDIUM: f64 = 0.5;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if confidence is at or above the high threshold.
    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }

    /// Check if confidence is below the medium threshold.
    pub fn is_low(self) -> bool {
        self.0 < Self::MEDIUM
    }

    /// Absolute distance between two scores.
    pub fn delta(self, other: Self) -> f64 {
        (self.0 - other.0).abs()
    }

    /// Reduce by `penalty` without going below `floor`.
    pub fn penalized(self, penalty: f64, floor: f64) -> Self {
        Self::new((self.0 - penalty).max(floor))
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
    }

    #[test]
    fn penalty_respects_floor() {
        let c = Confidence::new(0.6).penalized(0.3, 0.1);
        assert!((c.value() - 0.3).abs() < 1e-9);

        let c = Confidence::new(0.25).penalized(0.3, 0.1);
        assert!((c.value() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn band_boundaries() {
        assert!(Confidence::new(0.8).is_high());
        assert!(!Confidence::new(0.79).is_high());
        assert!(Confidence::new(0.49).is_low());
        assert!(!Confidence::new(0.5).is_low());
    }

    #[test]
    fn deserializes_from_bare_number() {
        let c: Confidence = serde_json::from_str("0.42").unwrap();
        assert!((c.value() - 0.42).abs() < 1e-9);
        let c: Confidence = serde_json::from_str("3.0").unwrap();
        assert_eq!(c.value(), 1.0);
    }
}
