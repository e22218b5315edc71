//! The nine fixed rules, in priority order.

use chrono::Duration;

use attune_core::models::NudgePriority;

use crate::context::SuppressionContext;
use crate::hash;
use crate::rule::SuppressionRule;

/// Daily delivery cap.
pub const DAILY_CAP: u32 = 5;
/// Minimum gap between deliveries, in hours.
pub const COOLDOWN_HOURS: i64 = 2;
/// Dismissals in one day that read as nudge fatigue.
pub const FATIGUE_DISMISSALS: u32 = 3;
/// Meeting hours that mark a heavily booked day.
pub const HEAVY_MEETING_HOURS: f64 = 2.0;
/// Recovery score below which only morning anchors go out.
pub const LOW_RECOVERY_SCORE: u32 = 30;
/// Morning window `[start, end)` exempt from the low-recovery rule.
pub const MORNING_WINDOW: (u32, u32) = (5, 10);
/// Streak length that earns breathing room.
pub const STREAK_RESPECT_DAYS: u32 = 7;
/// Confidence floor, expressed as the user-facing percentage.
pub const CONFIDENCE_FLOOR_PCT: u32 = 40;

fn daily_cap(ctx: &SuppressionContext) -> Option<String> {
    (ctx.nudges_delivered_today >= DAILY_CAP).then(|| {
        format!(
            "daily cap reached: {} of {} nudges already delivered",
            ctx.nudges_delivered_today, DAILY_CAP
        )
    })
}

fn quiet_hours(ctx: &SuppressionContext) -> Option<String> {
    ctx.quiet_hours.contains(ctx.local_hour).then(|| {
        format!(
            "inside quiet hours ({:02}:00-{:02}:00, local hour {})",
            ctx.quiet_hours.start, ctx.quiet_hours.end, ctx.local_hour
        )
    })
}

fn cooldown(ctx: &SuppressionContext) -> Option<String> {
    let last = ctx.last_delivery_at?;
    let elapsed = ctx.now - last;
    (elapsed < Duration::hours(COOLDOWN_HOURS)).then(|| {
        format!(
            "last nudge {} minutes ago, cooldown is {} hours",
            elapsed.num_minutes(),
            COOLDOWN_HOURS
        )
    })
}

fn fatigue_detection(ctx: &SuppressionContext) -> Option<String> {
    (ctx.dismissals_today >= FATIGUE_DISMISSALS).then(|| {
        format!(
            "{} dismissals today reads as nudge fatigue",
            ctx.dismissals_today
        )
    })
}

fn meeting_awareness(ctx: &SuppressionContext) -> Option<String> {
    // Only routine nudges yield to a busy calendar.
    (ctx.priority == NudgePriority::Standard
        && ctx.meeting_hours_today >= HEAVY_MEETING_HOURS)
        .then(|| {
            format!(
                "{:.1} meeting hours today, holding standard nudges",
                ctx.meeting_hours_today
            )
        })
}

fn low_recovery(ctx: &SuppressionContext) -> Option<String> {
    let (morning_start, morning_end) = MORNING_WINDOW;
    let in_morning = ctx.local_hour >= morning_start && ctx.local_hour < morning_end;
    (ctx.recovery_score < LOW_RECOVERY_SCORE && !ctx.is_morning_anchor && !in_morning).then(
        || {
            format!(
                "recovery {} is low; morning-only mode outside {:02}:00-{:02}:00",
                ctx.recovery_score, morning_start, morning_end
            )
        },
    )
}

fn streak_respect(ctx: &SuppressionContext) -> Option<String> {
    (ctx.current_streak >= STREAK_RESPECT_DAYS
        && hash::streak_coin(ctx.local_date, ctx.current_streak))
    .then(|| {
        format!(
            "respecting a {}-day streak, backing off today",
            ctx.current_streak
        )
    })
}

fn low_confidence(ctx: &SuppressionContext) -> Option<String> {
    // Boundary is inclusive on the pass side: 0.40 passes.
    (ctx.confidence_score < CONFIDENCE_FLOOR_PCT as f64 / 100.0).then(|| {
        format!(
            "confidence {:.0}% below the {}% floor",
            ctx.confidence_score * 100.0,
            CONFIDENCE_FLOOR_PCT
        )
    })
}

fn mvd_active(ctx: &SuppressionContext) -> Option<String> {
    (ctx.mvd_active && !ctx.mvd_approved)
        .then(|| "minimum viable day active, nudge not on the approved set".to_string())
}

/// The fixed rule table, ascending priority. The engine asserts the order
/// once at construction and never reorders.
pub const TABLE: [SuppressionRule; 9] = [
    SuppressionRule {
        id: "daily_cap",
        name: "Daily cap",
        priority: 1,
        overridable_by: &[NudgePriority::Critical],
        check: daily_cap,
    },
    SuppressionRule {
        id: "quiet_hours",
        name: "Quiet hours",
        priority: 2,
        overridable_by: &[],
        check: quiet_hours,
    },
    SuppressionRule {
        id: "cooldown",
        name: "Delivery cooldown",
        priority: 3,
        overridable_by: &[NudgePriority::Critical],
        check: cooldown,
    },
    SuppressionRule {
        id: "fatigue_detection",
        name: "Fatigue detection",
        priority: 4,
        overridable_by: &[],
        check: fatigue_detection,
    },
    SuppressionRule {
        id: "meeting_awareness",
        name: "Meeting awareness",
        priority: 5,
        overridable_by: &[NudgePriority::Critical, NudgePriority::Adaptive],
        check: meeting_awareness,
    },
    SuppressionRule {
        id: "low_recovery",
        name: "Low recovery",
        priority: 6,
        overridable_by: &[],
        check: low_recovery,
    },
    SuppressionRule {
        id: "streak_respect",
        name: "Streak respect",
        priority: 7,
        overridable_by: &[],
        check: streak_respect,
    },
    SuppressionRule {
        id: "low_confidence",
        name: "Low confidence",
        priority: 8,
        overridable_by: &[],
        check: low_confidence,
    },
    SuppressionRule {
        id: "mvd_active",
        name: "Minimum viable day",
        priority: 9,
        overridable_by: &[],
        check: mvd_active,
    },
];
