use crate::errors::LoreResult;
use crate::record::{KnowledgeRecord, RecordPatch};

/// The storage collaborator the quality engine reads from and writes through.
///
/// Implementations own durability and embedding; the engine only ever
/// fetches the full snapshot and merges metadata patches.
#[allow(async_fn_in_trait)]
pub trait IKnowledgeStore: Send + Sync {
    /// Every record with its current embedding and metadata.
    /// Must reflect writes made through `update_metadata` once they return.
    async fn fetch_all(&self) -> LoreResult<Vec<KnowledgeRecord>>;

    /// Merge `patch` into the stored record.
    /// Fails with `RecordNotFound` if `id` no longer exists.
    async fn update_metadata(&self, id: &str, patch: RecordPatch) -> LoreResult<()>;

    /// Load a single record. Stores with direct lookup should override this.
    async fn get(&self, id: &str) -> LoreResult<Option<KnowledgeRecord>> {
        Ok(self.fetch_all().await?.into_iter().find(|r| r.id == id))
    }
}
