//! Multiplicative relevance scoring for retrieval and pruning.
//!
//! Starting from the memory's confidence:
//! ×1.5 when its source protocol equals the context protocol,
//! ×1.3 for a `preferred_time` memory naming the requested time of day,
//! ×1.2 when used within 7 days / ×0.8 when unused for over 30,
//! ×1.1 at evidence_count ≥ 5, final score clamped to ≤ 1.

use chrono::{DateTime, Utc};

use attune_core::memory::{Memory, MemoryType};
use attune_core::models::TimeOfDay;

/// Protocol-match boost.
const PROTOCOL_MATCH_BOOST: f64 = 1.5;
/// Time-of-day mention boost for preferred_time memories.
const TIME_MENTION_BOOST: f64 = 1.3;
/// Recency boost when last used under a week ago.
const RECENT_USE_BOOST: f64 = 1.2;
/// Staleness damping when unused for over 30 days.
const STALE_USE_DAMPING: f64 = 0.8;
/// Boost for well-evidenced memories (evidence_count ≥ 5).
const EVIDENCE_BOOST: f64 = 1.1;

/// What the caller is asking for. All fields beyond `now` are optional
/// filters; `min_confidence` falls back to the configured retrieval floor.
#[derive(Debug, Clone)]
pub struct RetrievalContext {
    pub now: DateTime<Utc>,
    /// Type allow-list. `None` admits all six types.
    pub types: Option<Vec<MemoryType>>,
    /// Candidate protocol. Admits exact matches and protocol-less memories.
    pub protocol_id: Option<String>,
    /// Time of day the nudge would land in.
    pub time_of_day: Option<TimeOfDay>,
    /// Override of the retrieval confidence floor.
    pub min_confidence: Option<f64>,
}

impl RetrievalContext {
    /// A context with no filters, scoring purely on confidence and recency.
    pub fn bare(now: DateTime<Utc>) -> Self {
        Self {
            now,
            types: None,
            protocol_id: None,
            time_of_day: None,
            min_confidence: None,
        }
    }
}

/// A memory together with the relevance it scored in one retrieval.
#[derive(Debug, Clone)]
pub struct ScoredMemory {
    pub memory: Memory,
    pub relevance: f64,
}

/// Score one memory against a retrieval context.
pub fn score(memory: &Memory, ctx: &RetrievalContext) -> f64 {
    let mut s = memory.confidence.value();

    if let (Some(wanted), Some(source)) = (&ctx.protocol_id, &memory.source_protocol_id) {
        if wanted == source {
            s *= PROTOCOL_MATCH_BOOST;
        }
    }

    if memory.memory_type == MemoryType::PreferredTime {
        if let Some(tod) = ctx.time_of_day {
            if memory.content.to_lowercase().contains(tod.label()) {
                s *= TIME_MENTION_BOOST;
            }
        }
    }

    let days_since_use = (ctx.now - memory.last_used_at).num_days();
    if days_since_use < 7 {
        s *= RECENT_USE_BOOST;
    } else if days_since_use > 30 {
        s *= STALE_USE_DAMPING;
    }

    if memory.evidence_count >= attune_core::constants::EVIDENCE_STABILITY_THRESHOLD {
        s *= EVIDENCE_BOOST;
    }

    s.min(1.0)
}

/// Context-free relevance, used by pruning to rank a user's memories when
/// picking the lowest-value excess over the cap.
pub fn baseline_score(memory: &Memory, now: DateTime<Utc>) -> f64 {
    score(memory, &RetrievalContext::bare(now))
}

/// Retrieval ordering: relevance desc, type priority asc, confidence desc.
pub fn sort_for_retrieval(scored: &mut [ScoredMemory]) {
    scored.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.memory.memory_type.rank().cmp(&b.memory.memory_type.rank()))
            .then_with(|| {
                b.memory
                    .confidence
                    .value()
                    .partial_cmp(&a.memory.confidence.value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}
