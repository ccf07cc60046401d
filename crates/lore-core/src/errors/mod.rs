mod storage_error;

pub use storage_error::StorageError;

/// Top-level error for every Lore crate.
#[derive(Debug, thiserror::Error)]
pub enum LoreError {
    #[error("record not found: {id}")]
    RecordNotFound { id: String },

    #[error("invalid record kind: {kind}")]
    InvalidKind { kind: String },

    #[error("malformed record {id}: {reason}")]
    MalformedRecord { id: String, reason: String },

    #[error("invalid option {field}: {reason}")]
    InvalidOptions { field: String, reason: String },

    #[error("supersession cycle detected at record {id}")]
    SupersessionCycle { id: String },

    #[error("record {id} was already superseded by {superseded_by}")]
    AlreadySuperseded { id: String, superseded_by: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

impl LoreError {
    /// Shorthand for a missing record.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Shorthand for an out-of-range option.
    pub fn invalid_option(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the referenced record no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }
}

pub type LoreResult<T> = Result<T, LoreError>;
