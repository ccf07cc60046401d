use std::collections::{HashMap, HashSet};

use lore_core::errors::{LoreError, LoreResult};
use lore_core::record::KnowledgeRecord;

/// Follow `superseded_by` links from `id` to the current head.
///
/// The chain starts with `id`. A winner id that no longer resolves to a
/// record ends the chain as its last element.
pub fn supersession_chain(records: &[KnowledgeRecord], id: &str) -> LoreResult<Vec<String>> {
    let by_id: HashMap<&str, &KnowledgeRecord> =
        records.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut current = *by_id.get(id).ok_or_else(|| LoreError::not_found(id))?;
    let mut chain = vec![current.id.clone()];
    let mut seen: HashSet<&str> = HashSet::from([current.id.as_str()]);

    while let Some(s) = &current.supersession {
        let next = s.superseded_by.as_str();
        if !seen.insert(next) {
            return Err(LoreError::SupersessionCycle { id: next.to_string() });
        }
        chain.push(next.to_string());
        match by_id.get(next) {
            Some(r) => current = *r,
            None => break,
        }
    }
    Ok(chain)
}
