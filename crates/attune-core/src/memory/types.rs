use serde::{Deserialize, Serialize};

/// The six fixed memory type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryType {
    /// A user's reaction to a delivered nudge (accepted, dismissed, snoozed).
    NudgeFeedback,
    /// Observed outcome of a protocol the user actually ran.
    ProtocolEffectiveness,
    /// A time of day the user responds well at.
    PreferredTime,
    /// Something the user told us outright.
    StatedPreference,
    /// A behavioral pattern inferred from repeated observations.
    PatternDetected,
    /// A hard constraint the user stated ("never before 9am").
    PreferenceConstraint,
}

impl MemoryType {
    /// All six types, in tie-break priority order.
    pub const ALL: [MemoryType; 6] = [
        MemoryType::StatedPreference,
        MemoryType::PreferenceConstraint,
        MemoryType::ProtocolEffectiveness,
        MemoryType::PreferredTime,
        MemoryType::NudgeFeedback,
        MemoryType::PatternDetected,
    ];

    /// Tie-break priority for retrieval ordering. Lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            MemoryType::StatedPreference => 1,
            MemoryType::PreferenceConstraint => 2,
            MemoryType::ProtocolEffectiveness => 3,
            MemoryType::PreferredTime => 4,
            MemoryType::NudgeFeedback => 5,
            MemoryType::PatternDetected => 6,
        }
    }

    /// Retention window in days. `None` means the memory never expires.
    ///
    /// Stated preferences and constraints persist until the user revises
    /// them; the observational types go stale on a fixed horizon.
    pub fn retention_days(self) -> Option<i64> {
        match self {
            MemoryType::NudgeFeedback => Some(30),
            MemoryType::PatternDetected => Some(60),
            MemoryType::PreferredTime => Some(90),
            MemoryType::ProtocolEffectiveness => Some(90),
            MemoryType::StatedPreference => None,
            MemoryType::PreferenceConstraint => None,
        }
    }
}
