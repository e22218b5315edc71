use serde::{Deserialize, Serialize};

/// Published evidence level backing a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceLevel {
    VeryHigh,
    High,
    Moderate,
    Emerging,
}

impl EvidenceLevel {
    /// Map to the fixed evidence-strength factor value.
    pub fn strength(self) -> f64 {
        match self {
            EvidenceLevel::VeryHigh => 1.0,
            EvidenceLevel::High => 0.8,
            EvidenceLevel::Moderate => 0.6,
            EvidenceLevel::Emerging => 0.4,
        }
    }
}

/// A candidate protocol as handed to us by the external retrieval layer.
///
/// The `relevance` field is the vector-search score; this core treats it as
/// an opaque 0-1 signal and never recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolCandidate {
    pub id: String,
    pub name: String,
    /// Category tag, e.g. "circadian", "movement", "sleep", "stress".
    pub category: String,
    /// Protocol tier (1 = foundational).
    pub tier: u8,
    /// Benefits / constraints prose, used for keyword overlap only.
    pub benefits: String,
    /// Citation keys; carried through for the audit record.
    #[serde(default)]
    pub citations: Vec<String>,
    pub evidence_level: EvidenceLevel,
    /// Vector-search relevance in [0, 1].
    pub relevance: f64,
}
