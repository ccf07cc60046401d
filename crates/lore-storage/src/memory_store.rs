//! InMemoryStore — DashMap keyed by record id.

use std::sync::OnceLock;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use lore_core::errors::{LoreError, LoreResult, StorageError};
use lore_core::record::{KnowledgeRecord, RecordPatch};
use lore_core::traits::IKnowledgeStore;

/// Thread-safe record store. `fetch_all` is ordered by creation time, then id,
/// so every engine pass sees the same snapshot order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<String, KnowledgeRecord>,
    /// Fixed by the first embedded record accepted.
    dimensions: OnceLock<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = KnowledgeRecord>) -> LoreResult<Self> {
        let store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Add a new record. Rejects duplicate ids, empty content, and embeddings
    /// whose length disagrees with records already stored.
    pub fn insert(&self, record: KnowledgeRecord) -> LoreResult<()> {
        if record.content.trim().is_empty() {
            return Err(LoreError::MalformedRecord {
                id: record.id,
                reason: "content is empty".into(),
            });
        }
        let slot = match self.records.entry(record.id.clone()) {
            Entry::Occupied(_) => {
                return Err(StorageError::DuplicateId { id: record.id }.into());
            }
            Entry::Vacant(slot) => slot,
        };
        if let Some(embedding) = record.embedding() {
            let expected = *self.dimensions.get_or_init(|| embedding.len());
            if embedding.len() != expected {
                return Err(StorageError::DimensionMismatch {
                    expected,
                    actual: embedding.len(),
                }
                .into());
            }
        }
        debug!(id = %record.id, kind = %record.kind, "record inserted");
        slot.insert(record);
        Ok(())
    }

    /// Embedding length fixed by the first embedded record, if any.
    /// Removing records does not reset it.
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions.get().copied()
    }

    /// Link `source` to `target`. Idempotent.
    pub fn link(&self, source_id: &str, target_id: &str) -> LoreResult<()> {
        if !self.records.contains_key(target_id) {
            return Err(LoreError::not_found(target_id));
        }
        let mut source = self
            .records
            .get_mut(source_id)
            .ok_or_else(|| LoreError::not_found(source_id))?;
        source.related_ids.insert(target_id.to_string());
        Ok(())
    }

    /// Read path bookkeeping: bump the access counter and timestamp.
    pub fn record_access(&self, id: &str) -> LoreResult<u64> {
        let mut record = self
            .records
            .get_mut(id)
            .ok_or_else(|| LoreError::not_found(id))?;
        record.access_count += 1;
        record.last_accessed_at = Utc::now();
        Ok(record.access_count)
    }

    /// Physically delete a record. Returns it if it existed.
    pub fn remove(&self, id: &str) -> Option<KnowledgeRecord> {
        self.records.remove(id).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn snapshot(&self) -> Vec<KnowledgeRecord> {
        let mut records: Vec<KnowledgeRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        records
    }
}

impl IKnowledgeStore for InMemoryStore {
    async fn fetch_all(&self) -> LoreResult<Vec<KnowledgeRecord>> {
        Ok(self.snapshot())
    }

    async fn update_metadata(&self, id: &str, patch: RecordPatch) -> LoreResult<()> {
        let mut record = self
            .records
            .get_mut(id)
            .ok_or_else(|| LoreError::not_found(id))?;
        patch.apply(&mut *record);
        Ok(())
    }

    async fn get(&self, id: &str) -> LoreResult<Option<KnowledgeRecord>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }
}
