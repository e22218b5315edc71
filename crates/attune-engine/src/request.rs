//! One decision request: everything external collaborators feed the core.

use chrono::{DateTime, Utc};

use attune_core::models::{NudgePriority, ProtocolCandidate, UserDayState};

/// Memories retrieved per decision unless the caller asks otherwise.
pub const DEFAULT_MEMORY_LIMIT: usize = 10;

/// An immutable request: candidate protocol, user/day state, and the
/// evaluation instant. The orchestrator never reads the wall clock.
#[derive(Debug, Clone)]
pub struct DecisionRequest {
    pub user_id: String,
    /// The user's stated goal, free text.
    pub user_goal: String,
    /// The app module the nudge originates from, when one applies.
    pub module: Option<String>,
    pub protocol: ProtocolCandidate,
    pub priority: NudgePriority,
    /// Day state from scheduling/wearable/calendar collaborators; defaults
    /// already applied by `UserDayState::default()` for anything missing.
    pub day_state: UserDayState,
    /// Whether the candidate is a morning-anchor protocol.
    pub is_morning_anchor: bool,
    /// Whether the candidate is on the MVD-approved minimal set.
    pub mvd_approved: bool,
    /// Categories of the other candidates in this batch.
    pub batch_categories: Vec<String>,
    /// HRV deviation from baseline in percent, when a wearable reported one.
    pub hrv_deviation: Option<f64>,
    /// Cap on retrieved memories.
    pub memory_limit: usize,
    /// Evaluation instant.
    pub now: DateTime<Utc>,
}

impl DecisionRequest {
    /// Minimal request with default day state and memory limit.
    pub fn new(
        user_id: impl Into<String>,
        user_goal: impl Into<String>,
        protocol: ProtocolCandidate,
        priority: NudgePriority,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_goal: user_goal.into(),
            module: None,
            protocol,
            priority,
            day_state: UserDayState::default(),
            is_morning_anchor: false,
            mvd_approved: false,
            batch_categories: Vec::new(),
            hrv_deviation: None,
            memory_limit: DEFAULT_MEMORY_LIMIT,
            now,
        }
    }
}
