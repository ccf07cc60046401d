//! # lore-storage
//!
//! Concurrent in-memory implementation of [`IKnowledgeStore`], plus the
//! write-path helpers (insert, link, access tracking, removal) that a real
//! store would expose to the rest of the system.
//!
//! [`IKnowledgeStore`]: lore_core::traits::IKnowledgeStore

mod memory_store;

pub use memory_store::InMemoryStore;
