//! The decision pipeline.

use tracing::{info, warn};

use attune_core::models::{NudgeDecision, TimeOfDay};
use attune_core::traits::MemoryStorage;
use attune_memory::{MemoryStore, RetrievalContext};
use attune_scoring::{ConfidenceScorer, ScoringContext};
use attune_suppression::{SuppressionContext, SuppressionEngine};

use crate::request::DecisionRequest;

/// Sequences the three components over one request. Construction wires the
/// dependencies explicitly; there are no module-level singletons, so tests
/// inject their own storage and get deterministic runs.
pub struct DecisionEngine<'a> {
    store: MemoryStore<'a>,
    scorer: ConfidenceScorer,
    suppression: SuppressionEngine,
}

impl<'a> DecisionEngine<'a> {
    pub fn new(storage: &'a dyn MemoryStorage) -> Self {
        Self {
            store: MemoryStore::new(storage),
            scorer: ConfidenceScorer::new(),
            suppression: SuppressionEngine::new(),
        }
    }

    pub fn with_parts(
        store: MemoryStore<'a>,
        scorer: ConfidenceScorer,
        suppression: SuppressionEngine,
    ) -> Self {
        Self {
            store,
            scorer,
            suppression,
        }
    }

    pub fn store(&self) -> &MemoryStore<'a> {
        &self.store
    }

    /// Decide whether to deliver one candidate nudge. Infallible: a
    /// retrieval failure reads as "no memories" and the pipeline proceeds;
    /// the result is always a complete audit record.
    pub fn decide(&self, request: &DecisionRequest) -> NudgeDecision {
        let time_of_day = TimeOfDay::from_hour(request.day_state.local_hour);

        let retrieval = RetrievalContext {
            now: request.now,
            types: None,
            protocol_id: Some(request.protocol.id.clone()),
            time_of_day: Some(time_of_day),
            min_confidence: None,
        };
        let memories = match self.store.retrieve_relevant(
            &request.user_id,
            &retrieval,
            request.memory_limit,
        ) {
            Ok(scored) => scored.into_iter().map(|s| s.memory).collect(),
            Err(e) => {
                // Fail open: score without memory support rather than crash.
                warn!(user_id = %request.user_id, error = %e, "memory retrieval failed, proceeding without memories");
                Vec::new()
            }
        };

        let report = self.scorer.score(&ScoringContext {
            user_goal: request.user_goal.clone(),
            module: request.module.clone(),
            protocol: request.protocol.clone(),
            memories,
            time_of_day,
            recovery_score: Some(request.day_state.recovery_score),
            hrv_deviation: request.hrv_deviation,
            batch_categories: request.batch_categories.clone(),
        });

        let ctx = SuppressionContext::build(
            &request.day_state,
            request.priority,
            report.overall,
            request.is_morning_anchor,
            request.mvd_approved,
            request.now,
        );
        let verdict = self.suppression.evaluate(&ctx);

        info!(
            user_id = %request.user_id,
            protocol_id = %request.protocol.id,
            deliver = verdict.should_deliver,
            confidence = report.overall,
            suppressed_by = verdict.suppressed_by.as_deref().unwrap_or("-"),
            "nudge decision"
        );

        NudgeDecision {
            should_deliver: verdict.should_deliver,
            confidence: report.overall,
            factors: report.factors,
            rules_checked: verdict.rules_checked,
            suppressed_by: verdict.suppressed_by,
            reason: verdict.reason,
            was_overridden: verdict.was_overridden,
            overridden_rule: verdict.overridden_rule,
        }
    }
}
