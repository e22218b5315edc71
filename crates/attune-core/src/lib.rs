//! # attune-core
//!
//! Foundation crate for the Attune nudge decision engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AttuneConfig;
pub use errors::{EngineError, EngineResult, StoreError};
pub use memory::{Confidence, Memory, MemoryType};
pub use models::{
    ConfidenceReport, EvidenceLevel, NudgeDecision, NudgePriority, ProtocolCandidate, QuietHours,
    TimeOfDay, UserDayState,
};
