//! Supersession-based resolution and the views over its audit trail.

pub mod auto;
pub mod conflicts;
pub mod history;
pub mod lineage;
pub mod resolve;

pub use auto::auto_resolve;
pub use conflicts::find_conflicts;
pub use history::superseded_history;
pub use lineage::supersession_chain;
pub use resolve::resolve_one;
