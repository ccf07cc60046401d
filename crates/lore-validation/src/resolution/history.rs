use std::collections::HashMap;

use lore_core::models::{RecordSummary, SupersededRecord};
use lore_core::record::KnowledgeRecord;

/// Every superseded record in `records`, in input order, joined with a
/// summary of its winner when the winner is still present.
pub fn superseded_history(records: &[KnowledgeRecord]) -> Vec<SupersededRecord> {
    let by_id: HashMap<&str, &KnowledgeRecord> =
        records.iter().map(|r| (r.id.as_str(), r)).collect();

    records
        .iter()
        .filter_map(|r| {
            let s = r.supersession.as_ref()?;
            let superseded_by_record = by_id.get(s.superseded_by.as_str()).map(|w| RecordSummary {
                id: w.id.clone(),
                content: w.content.clone(),
                kind: w.kind,
                confidence: w.confidence.value(),
            });
            Some(SupersededRecord {
                id: r.id.clone(),
                content: r.content.clone(),
                kind: r.kind,
                original_confidence: s.original_confidence.value(),
                current_confidence: r.confidence.value(),
                superseded_by: s.superseded_by.clone(),
                superseded_at: s.superseded_at,
                reason: s.reason.clone(),
                superseded_by_record,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lore_core::record::{KnowledgeKind, Supersession};

    fn superseded(id: &str, by: &str) -> KnowledgeRecord {
        let mut r = KnowledgeRecord::new(KnowledgeKind::Decision, format!("content {id}"))
            .with_id(id)
            .with_confidence(0.3);
        r.supersession = Some(Supersession {
            superseded_by: by.into(),
            superseded_at: Utc::now(),
            reason: "Highly similar content".into(),
            original_confidence: 0.6.into(),
        });
        r
    }

    #[test]
    fn joins_winner_summary_when_present() {
        let winner = KnowledgeRecord::new(KnowledgeKind::Decision, "winner")
            .with_id("w")
            .with_confidence(0.9);
        let records = vec![winner, superseded("l", "w"), superseded("orphan", "gone")];
        let history = superseded_history(&records);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, "l");
        assert!((history[0].original_confidence - 0.6).abs() < 1e-9);
        assert!((history[0].current_confidence - 0.3).abs() < 1e-9);
        let w = history[0].superseded_by_record.as_ref().unwrap();
        assert_eq!(w.id, "w");
        assert_eq!(w.content, "winner");

        assert_eq!(history[1].superseded_by, "gone");
        assert!(history[1].superseded_by_record.is_none());
    }

    #[test]
    fn active_records_are_not_listed() {
        let records = vec![KnowledgeRecord::new(KnowledgeKind::Error, "e")];
        assert!(superseded_history(&records).is_empty());
    }
}
