use serde::{Deserialize, Serialize};

use super::defaults;

/// Memory store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Hard cap on memories per user, enforced by pruning.
    pub max_memories_per_user: usize,
    /// Confidence floor for retrieval and low-confidence pruning.
    pub min_retrieval_confidence: f64,
    /// Decay rate assigned when the caller supplies none.
    pub default_decay_rate: f64,
    /// Content prefix length used by near-duplicate detection.
    pub dedup_prefix_len: usize,
    /// Whether near-duplicate detection ignores case.
    pub dedup_case_insensitive: bool,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_memories_per_user: defaults::DEFAULT_MAX_MEMORIES_PER_USER,
            min_retrieval_confidence: defaults::DEFAULT_MIN_RETRIEVAL_CONFIDENCE,
            default_decay_rate: defaults::DEFAULT_DECAY_RATE,
            dedup_prefix_len: defaults::DEFAULT_DEDUP_PREFIX_LEN,
            dedup_case_insensitive: defaults::DEFAULT_DEDUP_CASE_INSENSITIVE,
        }
    }
}
