//! Human-readable description of why a pair was flagged.

use lore_core::constants::{
    HIGHLY_SIMILAR_SIMILARITY, LARGE_CONFIDENCE_DELTA, MODERATE_CONFIDENCE_DELTA,
    NEARLY_IDENTICAL_SIMILARITY,
};
use lore_core::record::KnowledgeRecord;

const FALLBACK: &str = "Similar content with differing confidence";

/// Compose the reason string for a flagged pair.
///
/// Deterministic: the same pair and scores always produce the same text.
pub fn describe(
    a: &KnowledgeRecord,
    b: &KnowledgeRecord,
    similarity: f64,
    confidence_delta: f64,
) -> String {
    let mut reasons: Vec<String> = Vec::with_capacity(4);

    if similarity > NEARLY_IDENTICAL_SIMILARITY {
        reasons.push("Nearly identical content".into());
    } else if similarity > HIGHLY_SIMILAR_SIMILARITY {
        reasons.push("Highly similar content".into());
    }

    if confidence_delta > LARGE_CONFIDENCE_DELTA {
        reasons.push("Large confidence difference".into());
    } else if confidence_delta > MODERATE_CONFIDENCE_DELTA {
        reasons.push("Moderate confidence difference".into());
    }

    if a.verified != b.verified {
        reasons.push("Different verification status".into());
    }

    if a.kind != b.kind {
        reasons.push(format!("Different kinds ({} vs {})", a.kind, b.kind));
    }

    if reasons.is_empty() {
        return FALLBACK.to_string();
    }
    reasons.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::record::KnowledgeKind;

    #[test]
    fn composes_all_signals_in_order() {
        let a = KnowledgeRecord::new(KnowledgeKind::Decision, "x").with_verified(true);
        let b = KnowledgeRecord::new(KnowledgeKind::Pattern, "x");
        assert_eq!(
            describe(&a, &b, 0.99, 0.5),
            "Nearly identical content, Large confidence difference, \
             Different verification status, Different kinds (decision vs pattern)"
        );
    }

    #[test]
    fn moderate_bands() {
        let a = KnowledgeRecord::new(KnowledgeKind::Error, "x");
        let b = KnowledgeRecord::new(KnowledgeKind::Error, "y");
        assert_eq!(
            describe(&a, &b, 0.9, 0.2),
            "Highly similar content, Moderate confidence difference"
        );
    }

    #[test]
    fn falls_back_when_no_band_applies() {
        let a = KnowledgeRecord::new(KnowledgeKind::Error, "x");
        let b = KnowledgeRecord::new(KnowledgeKind::Error, "y");
        assert_eq!(describe(&a, &b, 0.8, 0.05), FALLBACK);
    }
}
