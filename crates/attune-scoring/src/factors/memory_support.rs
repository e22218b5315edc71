//! Memory support: what the user's own history says about this protocol.
//!
//! Starts neutral at 0.5. Effectiveness and feedback memories tied to this
//! exact protocol push the factor up in proportion to their confidence;
//! stated preferences mentioning the category nudge it up; constraint
//! memories mentioning the category pull it down harder.

use attune_core::memory::{Memory, MemoryType};
use attune_core::models::ProtocolCandidate;

/// Neutral score when no memory speaks to the candidate.
const NEUTRAL: f64 = 0.5;
/// Per-memory boost for protocol-linked effectiveness/feedback.
const SUPPORT_STEP: f64 = 0.1;
/// Per-memory boost for a stated preference naming the category.
const PREFERENCE_STEP: f64 = 0.05;
/// Per-memory penalty for a constraint naming the category.
const CONSTRAINT_STEP: f64 = 0.15;

pub fn calculate(protocol: &ProtocolCandidate, memories: &[Memory]) -> f64 {
    let category = protocol.category.to_lowercase();
    let mut score = NEUTRAL;

    for memory in memories {
        let confidence = memory.confidence.value();
        let links_protocol =
            memory.source_protocol_id.as_deref() == Some(protocol.id.as_str());
        let names_category = memory.content.to_lowercase().contains(&category);

        match memory.memory_type {
            MemoryType::ProtocolEffectiveness | MemoryType::NudgeFeedback
                if links_protocol =>
            {
                score += SUPPORT_STEP * confidence;
            }
            MemoryType::StatedPreference if names_category => {
                score += PREFERENCE_STEP * confidence;
            }
            MemoryType::PreferenceConstraint if names_category => {
                score -= CONSTRAINT_STEP * confidence;
            }
            _ => {}
        }
    }

    score.clamp(0.0, 1.0)
}

/// How many memories actively supported the candidate; reasoning uses this
/// to name the memory evidence when it is strong.
pub fn supporting_count(protocol: &ProtocolCandidate, memories: &[Memory]) -> usize {
    memories
        .iter()
        .filter(|m| {
            m.source_protocol_id.as_deref() == Some(protocol.id.as_str())
                && matches!(
                    m.memory_type,
                    MemoryType::ProtocolEffectiveness | MemoryType::NudgeFeedback
                )
        })
        .count()
}
