//! Evidence strength: the protocol's published evidence level mapped through
//! a fixed table (Very High 1.0, High 0.8, Moderate 0.6, Emerging 0.4).

use attune_core::models::ProtocolCandidate;

pub fn calculate(protocol: &ProtocolCandidate) -> f64 {
    protocol.evidence_level.strength()
}
