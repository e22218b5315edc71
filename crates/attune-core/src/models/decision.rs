use serde::{Deserialize, Serialize};

/// Per-factor confidence breakdown. The five weights are fixed and sum to
/// exactly 1.0; `conflict_risk` is inverted (high value = low conflict).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    pub protocol_fit: f64,
    pub memory_support: f64,
    pub timing_fit: f64,
    pub conflict_risk: f64,
    pub evidence_strength: f64,
}

/// Output of the Confidence Scorer: the scalar score, the factor
/// breakdown it came from, and a human-readable reasoning line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceReport {
    /// Weighted sum of the five factors, clamped to [0, 1].
    pub overall: f64,
    pub factors: ConfidenceFactors,
    /// True when `overall` falls below the 0.4 suppression floor.
    pub should_suppress: bool,
    /// One-line explanation naming the dominant factor.
    pub reasoning: String,
}

/// The audit record a decision run produces. This is the sole externally
/// visible output of the pipeline and the unit persisted for analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NudgeDecision {
    pub should_deliver: bool,
    /// Overall confidence from the scorer.
    pub confidence: f64,
    /// Factor breakdown behind `confidence`.
    pub factors: ConfidenceFactors,
    /// Rule ids in the order they were evaluated.
    pub rules_checked: Vec<String>,
    /// Rule that terminated evaluation, when suppressed.
    pub suppressed_by: Option<String>,
    /// Human-readable suppression reason, when suppressed.
    pub reason: Option<String>,
    /// Whether any rule fired but was overridden by nudge priority.
    pub was_overridden: bool,
    /// First rule that was overridden, when any was.
    pub overridden_rule: Option<String>,
}
