//! # attune-engine
//!
//! The Decision Orchestrator: retrieve memories → score confidence → build
//! the suppression context → evaluate the rule chain → emit the audit
//! record. The pipeline never propagates an error to its caller; every
//! failure path resolves to a valid `NudgeDecision`.

pub mod orchestrator;
pub mod request;

pub use orchestrator::DecisionEngine;
pub use request::DecisionRequest;
