//! The per-evaluation context snapshot.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use attune_core::models::{NudgePriority, QuietHours, UserDayState};

/// Immutable snapshot built once per evaluation. Rules read it; nothing
/// writes it. Missing upstream inputs were already resolved to defaults
/// when the `UserDayState` was built (recovery 100, quiet hours 22→6,
/// counters zero).
#[derive(Debug, Clone)]
pub struct SuppressionContext {
    pub nudges_delivered_today: u32,
    pub dismissals_today: u32,
    pub last_delivery_at: Option<DateTime<Utc>>,
    pub meeting_hours_today: f64,
    /// User's current local hour (0-23).
    pub local_hour: u32,
    pub quiet_hours: QuietHours,
    /// Recovery score 0-100; 100 when no wearable data arrived.
    pub recovery_score: u32,
    /// Whether the candidate protocol is a morning-anchor protocol.
    pub is_morning_anchor: bool,
    pub current_streak: u32,
    pub mvd_active: bool,
    /// Whether the candidate is on the MVD-approved minimal set.
    pub mvd_approved: bool,
    pub priority: NudgePriority,
    /// Overall confidence from the scorer.
    pub confidence_score: f64,
    /// Evaluation instant, supplied by the caller.
    pub now: DateTime<Utc>,
    /// The user's local calendar date, input to the streak coin. Derived
    /// from `now` shifted by the day state's UTC offset, so the coin never
    /// flips mid-local-day at UTC midnight.
    pub local_date: NaiveDate,
}

impl SuppressionContext {
    /// Build a snapshot from day state plus the per-candidate inputs.
    pub fn build(
        day: &UserDayState,
        priority: NudgePriority,
        confidence_score: f64,
        is_morning_anchor: bool,
        mvd_approved: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            nudges_delivered_today: day.nudges_delivered_today,
            dismissals_today: day.dismissals_today,
            last_delivery_at: day.last_delivery_at,
            meeting_hours_today: day.meeting_hours_today,
            local_hour: day.local_hour,
            quiet_hours: day.quiet_hours,
            recovery_score: day.recovery_score,
            is_morning_anchor,
            current_streak: day.current_streak,
            mvd_active: day.mvd_active,
            mvd_approved,
            priority,
            confidence_score,
            now,
            local_date: (now + Duration::minutes(day.utc_offset_minutes as i64)).date_naive(),
        }
    }
}
