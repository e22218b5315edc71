use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::types::MemoryType;

/// A durable, decaying belief about a single user.
///
/// Memories are owned by their user: no other entity may mutate one, and
/// every store operation is scoped to a user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    /// UUID v4 identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// One of the six fixed type tags.
    pub memory_type: MemoryType,
    /// Free-text content of the belief.
    pub content: String,
    /// Optional context string (where/when the observation came from).
    pub context: Option<String>,
    /// Confidence score, decays weekly and is boosted by reinforcement.
    pub confidence: Confidence,
    /// Number of observations backing this memory. Starts at 1.
    pub evidence_count: u32,
    /// Weekly decay rate in [0.01, 0.1]. Halved once evidence_count hits 5.
    pub decay_rate: f64,
    /// When the memory was first stored.
    pub created_at: DateTime<Utc>,
    /// Last time the memory was used or reinforced.
    pub last_used_at: DateTime<Utc>,
    /// Last time the weekly decay sweep touched this memory.
    pub last_decayed_at: DateTime<Utc>,
    /// Optional hard expiry, derived from the per-type retention table.
    pub expires_at: Option<DateTime<Utc>>,
    /// Nudge that produced this observation, if any.
    pub source_nudge_id: Option<String>,
    /// Protocol this observation is about, if any.
    pub source_protocol_id: Option<String>,
    /// Opaque metadata carried through untouched.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Memory {
    /// Whether the memory is past its hard expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Identity equality: two memories are equal if they have the same ID.
///
/// A memory's identity is its UUID, not its content; reinforcement mutates
/// content-adjacent fields without changing identity.
impl PartialEq for Memory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
