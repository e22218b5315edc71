//! Weekly confidence decay.
//!
//! `new_confidence = confidence * (1 - decay_rate) ^ weeks_since_last_decay`
//!
//! The sweep is idempotent within a 24-hour window: a memory decayed in the
//! last 24 hours is skipped, so overlapping sweep runs never double-decay.

use chrono::{DateTime, Duration, Utc};

use attune_core::constants::DECAY_SWEEP_COOLDOWN_HOURS;
use attune_core::memory::{Confidence, Memory};

const SECONDS_PER_WEEK: f64 = 7.0 * 86_400.0;

/// Outcome of a per-user decay sweep, for audit logging.
#[derive(Debug, Clone, Default)]
pub struct DecaySweepReport {
    /// Memories examined.
    pub examined: usize,
    /// Memories whose confidence was reduced.
    pub decayed: usize,
    /// Memories skipped because they decayed within the last 24 h.
    pub skipped: usize,
    /// Writes that failed at the backend, logged and skipped.
    pub failed: usize,
}

/// Whether this memory is still inside its 24-hour decay cooldown.
pub fn within_cooldown(memory: &Memory, now: DateTime<Utc>) -> bool {
    now - memory.last_decayed_at < Duration::hours(DECAY_SWEEP_COOLDOWN_HOURS)
}

/// Apply decay to a single memory in place. Returns false (and leaves the
/// memory untouched) when the cooldown window applies.
pub fn apply(memory: &mut Memory, now: DateTime<Utc>) -> bool {
    if within_cooldown(memory, now) {
        return false;
    }

    let weeks = (now - memory.last_decayed_at)
        .num_seconds()
        .max(0) as f64
        / SECONDS_PER_WEEK;

    let decayed = memory.confidence.value() * (1.0 - memory.decay_rate).powf(weeks);
    memory.confidence = Confidence::new(decayed);
    memory.last_decayed_at = now;
    true
}
