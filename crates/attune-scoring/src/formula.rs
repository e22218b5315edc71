//! 5-factor weighted confidence formula.
//!
//! ```text
//! overall = 0.25 × protocol_fit
//!         + 0.25 × memory_support
//!         + 0.20 × timing_fit
//!         + 0.15 × conflict_risk
//!         + 0.15 × evidence_strength
//! ```
//!
//! Weights are fixed constants of the model (no training, no config) and
//! sum to exactly 1.0. Result is clamped to [0.0, 1.0].

use attune_core::models::ConfidenceFactors;

/// The fixed factor weights.
pub mod weights {
    pub const PROTOCOL_FIT: f64 = 0.25;
    pub const MEMORY_SUPPORT: f64 = 0.25;
    pub const TIMING_FIT: f64 = 0.20;
    pub const CONFLICT_RISK: f64 = 0.15;
    pub const EVIDENCE_STRENGTH: f64 = 0.15;

    /// Sum of all five weights; must be exactly 1.0.
    pub const SUM: f64 =
        PROTOCOL_FIT + MEMORY_SUPPORT + TIMING_FIT + CONFLICT_RISK + EVIDENCE_STRENGTH;
}

/// Combine the five factors into the overall confidence.
pub fn combine(factors: &ConfidenceFactors) -> f64 {
    let overall = weights::PROTOCOL_FIT * factors.protocol_fit
        + weights::MEMORY_SUPPORT * factors.memory_support
        + weights::TIMING_FIT * factors.timing_fit
        + weights::CONFLICT_RISK * factors.conflict_risk
        + weights::EVIDENCE_STRENGTH * factors.evidence_strength;

    overall.clamp(0.0, 1.0)
}

/// The weighted contribution of each factor, used to pick the dominant one
/// for reasoning. Order matches the factor declaration order.
pub fn contributions(factors: &ConfidenceFactors) -> [(&'static str, f64); 5] {
    [
        ("protocol fit", weights::PROTOCOL_FIT * factors.protocol_fit),
        ("memory support", weights::MEMORY_SUPPORT * factors.memory_support),
        ("timing fit", weights::TIMING_FIT * factors.timing_fit),
        ("low conflict", weights::CONFLICT_RISK * factors.conflict_risk),
        ("evidence strength", weights::EVIDENCE_STRENGTH * factors.evidence_strength),
    ]
}
