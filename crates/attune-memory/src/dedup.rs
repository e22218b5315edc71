//! Near-duplicate detection.
//!
//! Two observations about the same user with the same type and an
//! overlapping content prefix are treated as one belief: the newer
//! observation reinforces the older memory instead of inserting a row.
//! Prefix length and case sensitivity are config knobs, not hard-coded
//! string slicing: the heuristic has known false-positive/negative risk
//! and callers need to be able to tune and test it.

use attune_core::config::MemoryConfig;
use attune_core::memory::{Memory, MemoryType};

/// Normalize content down to its comparison prefix.
fn comparison_prefix(content: &str, config: &MemoryConfig) -> String {
    let prefix: String = content.chars().take(config.dedup_prefix_len).collect();
    if config.dedup_case_insensitive {
        prefix.to_lowercase()
    } else {
        prefix
    }
}

/// Whether `candidate_content` is a near-duplicate of an existing memory.
/// Requires same type; prefixes overlap when one is a prefix of the other.
pub fn is_near_duplicate(
    existing: &Memory,
    candidate_type: MemoryType,
    candidate_content: &str,
    config: &MemoryConfig,
) -> bool {
    if existing.memory_type != candidate_type {
        return false;
    }
    let a = comparison_prefix(&existing.content, config);
    let b = comparison_prefix(candidate_content, config);
    a.starts_with(&b) || b.starts_with(&a)
}

/// Find the first reinforceable near-duplicate among a user's memories:
/// same type, overlapping prefix, and confidence at or above the retrieval
/// floor (memories already fading out are not worth reinforcing).
pub fn find_reinforcement_target<'a>(
    memories: &'a [Memory],
    candidate_type: MemoryType,
    candidate_content: &str,
    config: &MemoryConfig,
) -> Option<&'a Memory> {
    memories.iter().find(|m| {
        m.confidence.value() >= config.min_retrieval_confidence
            && is_near_duplicate(m, candidate_type, candidate_content, config)
    })
}
