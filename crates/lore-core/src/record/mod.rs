pub mod base;
pub mod confidence;
pub mod kind;
pub mod patch;
pub mod supersession;

pub use base::{are_related, KnowledgeRecord};
pub use confidence::Confidence;
pub use kind::KnowledgeKind;
pub use patch::RecordPatch;
pub use supersession::{Supersession, SupersedesEntry};
