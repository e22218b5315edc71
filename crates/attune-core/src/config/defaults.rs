//! Named defaults backing the `Default` impls of the config structs.

use crate::constants;

pub const DEFAULT_MAX_MEMORIES_PER_USER: usize = constants::MAX_MEMORIES_PER_USER;
pub const DEFAULT_MIN_RETRIEVAL_CONFIDENCE: f64 = constants::MIN_RETRIEVAL_CONFIDENCE;
pub const DEFAULT_DECAY_RATE: f64 = constants::DEFAULT_DECAY_RATE;

/// Content prefix length compared during near-duplicate detection.
pub const DEFAULT_DEDUP_PREFIX_LEN: usize = 32;
/// Near-duplicate comparison ignores case by default.
pub const DEFAULT_DEDUP_CASE_INSENSITIVE: bool = true;
