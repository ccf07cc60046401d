mod store;

pub use store::IKnowledgeStore;
