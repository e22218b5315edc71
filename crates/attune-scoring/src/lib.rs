//! # attune-scoring
//!
//! The Confidence Scorer: combines protocol/context fit, memory support,
//! timing fit, conflict risk, and evidence strength into one 0-1 confidence
//! value with a per-factor breakdown and a human-readable reasoning line.
//!
//! Scoring is a pure function of its context: no wall-clock reads, no
//! randomness; identical inputs produce bit-identical output.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod reasoning;

pub use engine::{ConfidenceScorer, ScoringContext};
pub use formula::weights;
