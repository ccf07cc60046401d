//! # lore-validation
//!
//! Keeps the collection internally consistent.
//!
//! ## Detection
//! All-pairs scan over embedded, non-superseded records. A pair is a
//! contradiction when it is semantically near-identical yet disagrees in
//! confidence. Linked records never contradict.
//!
//! ## Resolution
//! The weaker record of each pair is superseded: flagged, penalized, and
//! recorded in the winner's audit trail. Nothing is deleted.
//!
//! ## History
//! - Superseded records with their winners
//! - Lineage from any record to its current head
//! - Pre-write conflict lookup for not-yet-stored content

pub mod contradiction;
pub mod resolution;

pub use contradiction::ContradictionDetector;
pub use resolution::{auto_resolve, find_conflicts, resolve_one, superseded_history, supersession_chain};
