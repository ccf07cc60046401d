use std::cmp::Reverse;
use std::collections::HashMap;

use lore_core::models::ContentPattern;
use lore_core::record::{KnowledgeKind, KnowledgeRecord};

/// Characters of lower-cased content that identify a content pattern.
pub const PATTERN_PREFIX_CHARS: usize = 50;

/// Lower-cased, char-bounded prefix used as a grouping key.
pub fn prefix_key(content: &str, chars: usize) -> String {
    content.to_lowercase().chars().take(chars).collect()
}

/// Group records of `kind` by content prefix and keep recurring groups.
///
/// Groups with at least two records are returned by count, highest first,
/// capped at `limit`. Equal counts keep first-appearance order. The pattern
/// text is the content of the first record seen in the group.
pub fn group_by_prefix(
    records: &[KnowledgeRecord],
    kind: KnowledgeKind,
    limit: usize,
) -> Vec<ContentPattern> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(ContentPattern, f64)> = Vec::new();

    for r in records.iter().filter(|r| r.kind == kind) {
        let key = prefix_key(&r.content, PATTERN_PREFIX_CHARS);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((
                ContentPattern {
                    pattern: r.content.clone(),
                    count: 0,
                    first_seen: r.created_at,
                    last_seen: r.created_at,
                    avg_confidence: 0.0,
                    examples: Vec::new(),
                },
                0.0,
            ));
            groups.len() - 1
        });

        let (group, confidence_sum) = &mut groups[slot];
        group.count += 1;
        group.first_seen = group.first_seen.min(r.created_at);
        group.last_seen = group.last_seen.max(r.created_at);
        group.examples.push(r.id.clone());
        *confidence_sum += r.confidence.value();
    }

    let mut recurring: Vec<ContentPattern> = groups
        .into_iter()
        .filter(|(g, _)| g.count >= 2)
        .map(|(mut g, sum)| {
            g.avg_confidence = sum / g.count as f64;
            g
        })
        .collect();
    recurring.sort_by_key(|g| Reverse(g.count));
    recurring.truncate(limit);
    recurring
}
