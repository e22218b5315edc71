//! ConfidenceScorer: computes the five factors and folds them into a report.

use tracing::debug;

use attune_core::constants::SUPPRESSION_CONFIDENCE_FLOOR;
use attune_core::memory::Memory;
use attune_core::models::{ConfidenceFactors, ConfidenceReport, ProtocolCandidate, TimeOfDay};

use crate::factors;
use crate::formula;
use crate::reasoning;

/// Everything one scoring call looks at. Owned snapshot: the scorer never
/// reaches back into the memory store or the clock.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    /// The user's stated goal, free text ("sleep better", "more energy").
    pub user_goal: String,
    /// The app module the nudge originates from ("sleep", "energy"), when
    /// one applies.
    pub module: Option<String>,
    /// Candidate under evaluation.
    pub protocol: ProtocolCandidate,
    /// Memories retrieved for this user/context, already relevance-ranked.
    pub memories: Vec<Memory>,
    /// Time bucket the nudge would land in.
    pub time_of_day: TimeOfDay,
    /// Wearable recovery score, if one came in today.
    pub recovery_score: Option<u32>,
    /// HRV deviation from baseline in percent (negative = below baseline).
    pub hrv_deviation: Option<f64>,
    /// Categories of the OTHER candidates in the same batch.
    pub batch_categories: Vec<String>,
}

/// The Confidence Scorer. Stateless; one instance serves all users.
#[derive(Debug, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a candidate. Pure: identical contexts yield identical reports.
    pub fn score(&self, ctx: &ScoringContext) -> ConfidenceReport {
        let factors = ConfidenceFactors {
            protocol_fit: factors::protocol_fit::calculate(
                &ctx.user_goal,
                ctx.module.as_deref(),
                &ctx.protocol,
            ),
            memory_support: factors::memory_support::calculate(&ctx.protocol, &ctx.memories),
            timing_fit: factors::timing_fit::calculate(
                &ctx.protocol,
                ctx.time_of_day,
                ctx.recovery_score,
                ctx.hrv_deviation,
            ),
            conflict_risk: factors::conflict_risk::calculate(
                &ctx.protocol,
                &ctx.batch_categories,
            ),
            evidence_strength: factors::evidence_strength::calculate(&ctx.protocol),
        };

        let overall = formula::combine(&factors);
        let supporting =
            factors::memory_support::supporting_count(&ctx.protocol, &ctx.memories);
        let reasoning = reasoning::derive(&factors, overall, supporting);

        debug!(
            protocol_id = %ctx.protocol.id,
            overall,
            supporting,
            "scored candidate"
        );

        ConfidenceReport {
            overall,
            factors,
            should_suppress: overall < SUPPRESSION_CONFIDENCE_FLOOR,
            reasoning,
        }
    }
}
