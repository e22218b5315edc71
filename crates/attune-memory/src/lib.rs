//! # attune-memory
//!
//! The Memory Store: durable, decaying, per-user behavioral facts.
//! Storing a near-duplicate observation reinforces the existing memory
//! instead of inserting a new row; a weekly sweep decays confidence; pruning
//! enforces expiry, the confidence floor, and the per-user cap.

pub mod dedup;
pub mod decay;
pub mod memstore;
pub mod relevance;
pub mod store;

pub use decay::DecaySweepReport;
pub use memstore::InMemoryStore;
pub use relevance::{RetrievalContext, ScoredMemory};
pub use store::{MemoryStore, PruneReport, StoreMemoryInput};
