//! Structural quality issues across the whole collection.

use std::collections::HashMap;

use lore_core::config::AnalysisConfig;
use lore_core::models::{AntiPattern, AntiPatternKind, Severity};
use lore_core::record::{are_related, KnowledgeKind, KnowledgeRecord};
use tracing::{debug, instrument};

/// Characters of trimmed, lower-cased content compared for duplication.
const DUPLICATE_PREFIX_CHARS: usize = 100;

/// Sample size for the broad anti-patterns.
const AFFECTED_SAMPLE: usize = 10;

/// Run every anti-pattern check. Output order is duplication, low quality,
/// organization, incomplete; checks that do not fire are omitted.
#[instrument(skip_all, fields(records = records.len()))]
pub fn detect_anti_patterns(records: &[KnowledgeRecord], config: &AnalysisConfig) -> Vec<AntiPattern> {
    if records.is_empty() {
        return Vec::new();
    }

    let found: Vec<AntiPattern> = [
        duplication(records),
        low_quality(records, config),
        organization(records, config),
        incomplete(records, config),
    ]
    .into_iter()
    .flatten()
    .collect();

    debug!(anti_patterns = found.len(), "anti-pattern scan complete");
    found
}

fn duplication(records: &[KnowledgeRecord]) -> Option<AntiPattern> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&str>> = Vec::new();
    for r in records {
        let key: String = r
            .content
            .trim()
            .to_lowercase()
            .chars()
            .take(DUPLICATE_PREFIX_CHARS)
            .collect();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(r.id.as_str());
    }

    let duplicates: Vec<Vec<&str>> = groups.into_iter().filter(|g| g.len() > 1).collect();
    if duplicates.is_empty() {
        return None;
    }
    Some(AntiPattern {
        kind: AntiPatternKind::Duplication,
        severity: Severity::Medium,
        title: "Duplicate entries detected".into(),
        description: format!("Found {} groups of similar entries", duplicates.len()),
        recommendation: "Consolidate duplicate entries to maintain a clean knowledge base".into(),
        affected_ids: duplicates.into_iter().flatten().map(String::from).collect(),
    })
}

fn low_quality(records: &[KnowledgeRecord], config: &AnalysisConfig) -> Option<AntiPattern> {
    let low: Vec<&KnowledgeRecord> = records
        .iter()
        .filter(|r| r.confidence.value() < config.low_quality_confidence)
        .collect();
    if !exceeds(low.len(), records.len(), config.low_quality_ratio) {
        return None;
    }
    Some(AntiPattern {
        kind: AntiPatternKind::LowQuality,
        severity: Severity::High,
        title: "Excessive low-confidence entries".into(),
        description: format!(
            "{} entries have confidence < {:.0}%",
            low.len(),
            config.low_quality_confidence * 100.0
        ),
        recommendation: "Review and improve or remove low-confidence knowledge".into(),
        affected_ids: low.iter().map(|r| r.id.clone()).collect(),
    })
}

fn organization(records: &[KnowledgeRecord], config: &AnalysisConfig) -> Option<AntiPattern> {
    let untagged: Vec<&KnowledgeRecord> = records.iter().filter(|r| r.is_untagged()).collect();
    if !exceeds(untagged.len(), records.len(), config.untagged_ratio) {
        return None;
    }
    Some(AntiPattern {
        kind: AntiPatternKind::Organization,
        severity: Severity::Low,
        title: "Many untagged entries".into(),
        description: format!("{} entries have no tags", untagged.len()),
        recommendation: "Add tags to improve searchability and organization".into(),
        affected_ids: untagged
            .iter()
            .take(AFFECTED_SAMPLE)
            .map(|r| r.id.clone())
            .collect(),
    })
}

fn incomplete(records: &[KnowledgeRecord], config: &AnalysisConfig) -> Option<AntiPattern> {
    let errors: Vec<&KnowledgeRecord> = records
        .iter()
        .filter(|r| r.kind == KnowledgeKind::Error)
        .collect();
    if errors.is_empty() {
        return None;
    }
    let solutions: Vec<&KnowledgeRecord> = records
        .iter()
        .filter(|r| r.kind == KnowledgeKind::Solution)
        .collect();

    let unsolved: Vec<&KnowledgeRecord> = errors
        .iter()
        .copied()
        .filter(|e| !solutions.iter().any(|s| are_related(e, s)))
        .collect();
    if !exceeds(unsolved.len(), errors.len(), config.unresolved_error_ratio) {
        return None;
    }
    Some(AntiPattern {
        kind: AntiPatternKind::Incomplete,
        severity: Severity::Medium,
        title: "Errors without solutions".into(),
        description: format!("{} errors have no linked solution", unsolved.len()),
        recommendation: "Link solutions to errors or document that they are unresolved".into(),
        affected_ids: unsolved
            .iter()
            .take(AFFECTED_SAMPLE)
            .map(|r| r.id.clone())
            .collect(),
    })
}

/// Strictly more than `ratio` of `total`.
fn exceeds(count: usize, total: usize, ratio: f64) -> bool {
    count as f64 > total as f64 * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, kind: KnowledgeKind, content: &str) -> KnowledgeRecord {
        KnowledgeRecord::new(kind, content)
            .with_id(id)
            .with_confidence(0.9)
            .with_tags(["t"])
    }

    fn kinds(found: &[AntiPattern]) -> Vec<AntiPatternKind> {
        found.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn clean_collection_has_no_anti_patterns() {
        let records = vec![
            rec("e", KnowledgeKind::Error, "disk full").with_related(["s"]),
            rec("s", KnowledgeKind::Solution, "rotate logs"),
        ];
        assert!(detect_anti_patterns(&records, &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn duplicates_ignore_case_and_whitespace() {
        let records = vec![
            rec("a", KnowledgeKind::Pattern, "  Use builders "),
            rec("b", KnowledgeKind::Pattern, "use BUILDERS"),
            rec("c", KnowledgeKind::Pattern, "something else"),
        ];
        let found = detect_anti_patterns(&records, &AnalysisConfig::default());
        assert_eq!(kinds(&found), vec![AntiPatternKind::Duplication]);
        assert_eq!(found[0].affected_ids, vec!["a", "b"]);
        assert_eq!(found[0].description, "Found 1 groups of similar entries");
    }

    #[test]
    fn low_quality_needs_more_than_a_fifth() {
        let mut records: Vec<KnowledgeRecord> = (0..5)
            .map(|i| rec(&format!("r{i}"), KnowledgeKind::Insight, &format!("insight {i}")))
            .collect();
        records[0] = records[0].clone().with_confidence(0.2);
        // Exactly 20%: not flagged.
        assert!(detect_anti_patterns(&records, &AnalysisConfig::default()).is_empty());

        records[1] = records[1].clone().with_confidence(0.3);
        let found = detect_anti_patterns(&records, &AnalysisConfig::default());
        assert_eq!(kinds(&found), vec![AntiPatternKind::LowQuality]);
        assert_eq!(found[0].severity, Severity::High);
        assert_eq!(found[0].affected_ids, vec!["r0", "r1"]);
    }

    #[test]
    fn untagged_sample_is_capped() {
        let records: Vec<KnowledgeRecord> = (0..15)
            .map(|i| {
                KnowledgeRecord::new(KnowledgeKind::Decision, format!("decision {i}"))
                    .with_id(format!("d{i:02}"))
            })
            .collect();
        let found = detect_anti_patterns(&records, &AnalysisConfig::default());
        assert_eq!(kinds(&found), vec![AntiPatternKind::Organization]);
        assert_eq!(found[0].affected_ids.len(), 10);
        assert_eq!(found[0].description, "15 entries have no tags");
    }

    #[test]
    fn link_in_either_direction_resolves_an_error() {
        let records = vec![
            rec("e1", KnowledgeKind::Error, "oom in worker"),
            rec("e2", KnowledgeKind::Error, "null pointer"),
            rec("s1", KnowledgeKind::Solution, "raise memory limit").with_related(["e1"]),
        ];
        // One of two errors unsolved is exactly half: not flagged.
        assert!(detect_anti_patterns(&records, &AnalysisConfig::default()).is_empty());

        let records = vec![
            rec("e1", KnowledgeKind::Error, "oom in worker"),
            rec("e2", KnowledgeKind::Error, "null pointer"),
            rec("s1", KnowledgeKind::Solution, "raise memory limit"),
        ];
        let found = detect_anti_patterns(&records, &AnalysisConfig::default());
        assert_eq!(kinds(&found), vec![AntiPatternKind::Incomplete]);
        assert_eq!(found[0].affected_ids, vec!["e1", "e2"]);
    }

    #[test]
    fn empty_collection() {
        assert!(detect_anti_patterns(&[], &AnalysisConfig::default()).is_empty());
    }
}
