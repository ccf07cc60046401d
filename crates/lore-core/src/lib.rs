//! # lore-core
//!
//! Foundation crate for the Lore knowledge quality engine.
//! Defines the record model, the similarity primitive, errors, config,
//! the store collaborator trait, and every output model.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClusterOptions, DetectionOptions, LoreConfig};
pub use errors::{LoreError, LoreResult};
pub use record::{Confidence, KnowledgeKind, KnowledgeRecord, RecordPatch};
pub use traits::IKnowledgeStore;
