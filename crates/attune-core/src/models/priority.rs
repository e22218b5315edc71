use serde::{Deserialize, Serialize};

/// Delivery priority of a candidate nudge.
///
/// Priority is what suppression rules consult when deciding whether an
/// override applies; it never changes during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NudgePriority {
    /// Safety-relevant or time-critical; allowed past most soft caps.
    Critical,
    /// Adaptive recommendations reacting to live signals.
    Adaptive,
    /// Routine protocol reminders.
    Standard,
}
