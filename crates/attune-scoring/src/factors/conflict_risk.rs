//! Conflict risk, inverted: high value = low conflict.
//!
//! Each other candidate in the same batch sharing the protocol's category
//! costs a fixed step; a batch full of same-category candidates drives the
//! factor to zero.

use attune_core::models::ProtocolCandidate;

/// Penalty per same-category candidate in the batch.
const OVERLAP_STEP: f64 = 0.3;

/// `batch_categories` holds the categories of the OTHER candidates under
/// consideration in this batch, not the candidate's own.
pub fn calculate(protocol: &ProtocolCandidate, batch_categories: &[String]) -> f64 {
    let overlapping = batch_categories
        .iter()
        .filter(|c| c.eq_ignore_ascii_case(&protocol.category))
        .count();

    (1.0 - OVERLAP_STEP * overlapping as f64).max(0.0)
}
