use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::KnowledgeKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceBands {
    /// confidence >= 0.8
    pub high: usize,
    /// 0.5 <= confidence < 0.8
    pub medium: usize,
    /// confidence < 0.5
    pub low: usize,
}

/// Headline counts over the whole collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total: usize,
    pub by_kind: BTreeMap<KnowledgeKind, usize>,
    pub by_confidence: ConfidenceBands,
    pub verified: usize,
    pub superseded: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_accessed_id: Option<String>,
}
