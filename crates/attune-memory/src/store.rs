//! The MemoryStore engine: store/reinforce/retrieve/decay/prune over an
//! injected `MemoryStorage` backend.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use attune_core::config::MemoryConfig;
use attune_core::constants::{EVIDENCE_STABILITY_THRESHOLD, MAX_DECAY_RATE, MIN_DECAY_RATE};
use attune_core::errors::{EngineResult, StoreError};
use attune_core::memory::{Confidence, Memory, MemoryType};
use attune_core::traits::MemoryStorage;

use crate::decay::{self, DecaySweepReport};
use crate::dedup;
use crate::relevance::{self, RetrievalContext, ScoredMemory};

/// A new observation to store. Missing confidence and decay_rate fall back
/// to the documented defaults (0.5 and 0.05).
#[derive(Debug, Clone)]
pub struct StoreMemoryInput {
    pub user_id: String,
    pub memory_type: MemoryType,
    pub content: String,
    pub context: Option<String>,
    pub confidence: Option<f64>,
    pub decay_rate: Option<f64>,
    pub source_nudge_id: Option<String>,
    pub source_protocol_id: Option<String>,
}

/// Outcome of a prune pass, for audit logging.
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    /// Removed because past hard expiry.
    pub expired: usize,
    /// Removed because confidence fell below the retrieval floor.
    pub low_confidence: usize,
    /// Removed to enforce the per-user cap.
    pub over_cap: usize,
    /// Deletes that failed at the backend, logged and skipped.
    pub failed: usize,
}

impl PruneReport {
    pub fn total(&self) -> usize {
        self.expired + self.low_confidence + self.over_cap
    }
}

/// Memory store over an injected storage backend.
pub struct MemoryStore<'a> {
    storage: &'a dyn MemoryStorage,
    config: MemoryConfig,
}

impl<'a> MemoryStore<'a> {
    pub fn new(storage: &'a dyn MemoryStorage) -> Self {
        Self::with_config(storage, MemoryConfig::default())
    }

    pub fn with_config(storage: &'a dyn MemoryStorage, config: MemoryConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Store a new observation, or reinforce the existing near-duplicate.
    ///
    /// A near-duplicate is a same-user, same-type memory whose content
    /// prefix overlaps the new observation's and whose confidence is still
    /// at or above the retrieval floor.
    pub fn store(&self, input: StoreMemoryInput, now: DateTime<Utc>) -> EngineResult<Memory> {
        let existing = self.storage.list_for_user(&input.user_id)?;
        if let Some(target) = dedup::find_reinforcement_target(
            &existing,
            input.memory_type,
            &input.content,
            &self.config,
        ) {
            let target_id = target.id.clone();
            debug!(memory_id = %target_id, "near-duplicate observation, reinforcing");
            return self.reinforce(&input.user_id, &target_id, now);
        }

        let expires_at = input
            .memory_type
            .retention_days()
            .map(|days| now + Duration::days(days));
        let memory = Memory {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: input.user_id,
            memory_type: input.memory_type,
            content: input.content,
            context: input.context,
            confidence: input
                .confidence
                .map(Confidence::new)
                .unwrap_or_default(),
            evidence_count: 1,
            decay_rate: input
                .decay_rate
                .unwrap_or(self.config.default_decay_rate)
                .clamp(MIN_DECAY_RATE, MAX_DECAY_RATE),
            created_at: now,
            last_used_at: now,
            last_decayed_at: now,
            expires_at,
            source_nudge_id: input.source_nudge_id,
            source_protocol_id: input.source_protocol_id,
            metadata: Default::default(),
        };
        self.storage.insert(&memory)?;
        Ok(memory)
    }

    /// Reinforce an existing memory: diminishing-returns confidence boost
    /// (capped at 0.95), evidence_count bump, and a decay-rate halving once
    /// the evidence count reaches 5 (floored at 0.01).
    pub fn reinforce(
        &self,
        user_id: &str,
        memory_id: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<Memory> {
        self.owned_memory(user_id, memory_id)?;

        // Applied under the row lock so a concurrent decay sweep cannot
        // overwrite this boost with a stale snapshot.
        let memory = self.storage.update_row(memory_id, &mut |m| {
            m.confidence = m.confidence.reinforced();
            m.evidence_count += 1;
            if m.evidence_count >= EVIDENCE_STABILITY_THRESHOLD {
                m.decay_rate = (m.decay_rate * 0.5).max(MIN_DECAY_RATE);
            }
            m.last_used_at = now;
        })?;
        debug!(
            memory_id = %memory.id,
            confidence = %memory.confidence,
            evidence = memory.evidence_count,
            "memory reinforced"
        );
        Ok(memory)
    }

    /// Retrieve the `limit` most relevant memories for a context.
    ///
    /// Filters: confidence at or above the floor, not expired, optional
    /// type allow-list, and, when a protocol is named, either an exact
    /// source-protocol match or no source protocol at all. Ordering is
    /// relevance desc, type priority asc, confidence desc.
    pub fn retrieve_relevant(
        &self,
        user_id: &str,
        ctx: &RetrievalContext,
        limit: usize,
    ) -> EngineResult<Vec<ScoredMemory>> {
        let floor = ctx
            .min_confidence
            .unwrap_or(self.config.min_retrieval_confidence);
        let memories = self.storage.list_for_user(user_id)?;

        let mut scored: Vec<ScoredMemory> = memories
            .into_iter()
            .filter(|m| m.confidence.value() >= floor)
            .filter(|m| !m.is_expired(ctx.now))
            .filter(|m| {
                ctx.types
                    .as_ref()
                    .map_or(true, |allowed| allowed.contains(&m.memory_type))
            })
            .filter(|m| match (&ctx.protocol_id, &m.source_protocol_id) {
                (Some(wanted), Some(source)) => wanted == source,
                _ => true,
            })
            .map(|m| {
                let relevance = relevance::score(&m, ctx);
                ScoredMemory {
                    memory: m,
                    relevance,
                }
            })
            .collect();

        relevance::sort_for_retrieval(&mut scored);
        scored.truncate(limit);
        Ok(scored)
    }

    /// Run the weekly decay sweep over one user's memories.
    /// Idempotent within 24 h: see [`crate::decay`].
    ///
    /// Each row decays under its own row lock, on whatever state is current
    /// when the lock is taken, so reinforcements landing mid-sweep survive.
    /// A failed write is logged and counted; the sweep keeps going.
    pub fn decay(&self, user_id: &str, now: DateTime<Utc>) -> EngineResult<DecaySweepReport> {
        let memories = self.storage.list_for_user(user_id)?;
        let mut report = DecaySweepReport {
            examined: memories.len(),
            ..Default::default()
        };

        for memory in memories {
            let mut decayed = false;
            let written = self
                .storage
                .update_row(&memory.id, &mut |row| decayed = decay::apply(row, now));
            match written {
                Ok(_) if decayed => report.decayed += 1,
                Ok(_) => report.skipped += 1,
                Err(e) => {
                    warn!(memory_id = %memory.id, error = %e, "decay write failed, continuing sweep");
                    report.failed += 1;
                }
            }
        }

        debug!(user_id, decayed = report.decayed, skipped = report.skipped, "decay sweep");
        Ok(report)
    }

    /// Remove expired and below-floor memories, then trim the lowest-value
    /// excess (oldest first among relevance ties) to the per-user cap.
    /// A failed delete is logged and counted; the pass keeps going.
    pub fn prune(&self, user_id: &str, now: DateTime<Utc>) -> EngineResult<PruneReport> {
        let memories = self.storage.list_for_user(user_id)?;
        let mut report = PruneReport::default();
        let mut survivors: Vec<Memory> = Vec::with_capacity(memories.len());

        for memory in memories {
            if memory.is_expired(now) {
                if self.prune_delete(&memory.id, &mut report) {
                    report.expired += 1;
                }
            } else if memory.confidence.value() < self.config.min_retrieval_confidence {
                if self.prune_delete(&memory.id, &mut report) {
                    report.low_confidence += 1;
                }
            } else {
                survivors.push(memory);
            }
        }

        let cap = self.config.max_memories_per_user;
        if survivors.len() > cap {
            // Lowest baseline relevance goes first; among ties, oldest first.
            survivors.sort_by(|a, b| {
                relevance::baseline_score(a, now)
                    .partial_cmp(&relevance::baseline_score(b, now))
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.created_at.cmp(&b.created_at))
            });
            let excess = survivors.len() - cap;
            for memory in survivors.iter().take(excess) {
                if self.prune_delete(&memory.id, &mut report) {
                    report.over_cap += 1;
                }
            }
        }

        debug!(
            user_id,
            expired = report.expired,
            low_confidence = report.low_confidence,
            over_cap = report.over_cap,
            "prune pass"
        );
        Ok(report)
    }

    /// Delete one memory. Only the owning user may do this.
    pub fn delete(&self, user_id: &str, memory_id: &str) -> EngineResult<()> {
        self.owned_memory(user_id, memory_id)?;
        self.storage.delete(memory_id)
    }

    /// Privacy erasure: drop every memory the user owns.
    pub fn delete_user(&self, user_id: &str) -> EngineResult<usize> {
        self.storage.delete_user(user_id)
    }

    /// Delete one row during a prune pass, swallowing backend failures.
    fn prune_delete(&self, memory_id: &str, report: &mut PruneReport) -> bool {
        match self.storage.delete(memory_id) {
            Ok(()) => true,
            Err(e) => {
                warn!(memory_id, error = %e, "prune delete failed, continuing pass");
                report.failed += 1;
                false
            }
        }
    }

    /// Fetch a memory and verify the caller owns it.
    fn owned_memory(&self, user_id: &str, memory_id: &str) -> EngineResult<Memory> {
        let memory = self
            .storage
            .get(memory_id)?
            .ok_or_else(|| StoreError::NotFound {
                id: memory_id.to_string(),
            })?;
        if memory.user_id != user_id {
            return Err(StoreError::NotOwner {
                id: memory_id.to_string(),
                user_id: user_id.to_string(),
            }
            .into());
        }
        Ok(memory)
    }
}
