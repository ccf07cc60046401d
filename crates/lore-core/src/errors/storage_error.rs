/// Errors raised by a knowledge store collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("duplicate record id: {id}")]
    DuplicateId { id: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
