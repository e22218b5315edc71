//! # attune-suppression
//!
//! The Suppression Engine: a fixed table of nine pure rule predicates
//! evaluated in ascending priority order. A firing rule suppresses delivery
//! unless the nudge's priority is in the rule's override set, in which case
//! evaluation records the override and continues: a later non-overridable
//! rule can still suppress. A rule predicate that panics is treated as
//! non-suppressing (fail open): a nudge decision must always complete.

pub mod context;
pub mod engine;
pub mod hash;
pub mod rule;
pub mod rules;

pub use context::SuppressionContext;
pub use engine::{SuppressionEngine, SuppressionVerdict};
pub use rule::SuppressionRule;
