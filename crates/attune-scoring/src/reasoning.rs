//! Human-readable reasoning derivation.

use attune_core::models::ConfidenceFactors;

use crate::formula;

/// Memory count at which the reasoning names the memory evidence outright.
const STRONG_MEMORY_COUNT: usize = 3;

/// One-line explanation: the dominant weighted factor, plus the memory
/// evidence when enough of the user's own history backs the candidate.
pub fn derive(factors: &ConfidenceFactors, overall: f64, supporting_memories: usize) -> String {
    let contributions = formula::contributions(factors);
    // Ties resolve to the first (highest-weighted) factor.
    let (dominant, _) = contributions
        .iter()
        .fold(contributions[0], |best, &c| if c.1 > best.1 { c } else { best });

    let mut line = format!(
        "confidence {:.0}% driven mainly by {}",
        overall * 100.0,
        dominant
    );
    if supporting_memories >= STRONG_MEMORY_COUNT {
        line.push_str(&format!(
            ", backed by {} memories of this protocol working",
            supporting_memories
        ));
    }
    line
}
