use chrono::{Duration, NaiveDate, TimeZone, Utc};

use attune_core::models::{NudgePriority, QuietHours, UserDayState};
use attune_suppression::{hash, rules, SuppressionContext, SuppressionEngine, SuppressionRule};

/// A context that passes every rule: midday, rested, nothing delivered yet.
fn clear_context(priority: NudgePriority, confidence: f64) -> SuppressionContext {
    let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
    let day = UserDayState {
        local_hour: 12,
        ..Default::default()
    };
    SuppressionContext::build(&day, priority, confidence, false, false, now)
}

// ── Chain mechanics ──────────────────────────────────────────────────────

#[test]
fn rules_are_checked_in_ascending_priority_order() {
    let engine = SuppressionEngine::new();
    let priorities: Vec<u8> = engine.rules().iter().map(|r| r.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
    assert_eq!(engine.rules().len(), 9);
}

#[test]
fn clean_pass_checks_all_nine_rules() {
    let engine = SuppressionEngine::new();
    let verdict = engine.evaluate(&clear_context(NudgePriority::Standard, 0.8));
    assert!(verdict.should_deliver);
    assert_eq!(verdict.rules_checked.len(), 9);
    assert_eq!(
        verdict.rules_checked,
        vec![
            "daily_cap",
            "quiet_hours",
            "cooldown",
            "fatigue_detection",
            "meeting_awareness",
            "low_recovery",
            "streak_respect",
            "low_confidence",
            "mvd_active",
        ]
    );
    assert!(!verdict.was_overridden);
}

#[test]
fn override_does_not_short_circuit_the_chain() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Critical, 0.8);
    ctx.nudges_delivered_today = 5;

    let verdict = engine.evaluate(&ctx);
    assert!(verdict.should_deliver);
    assert!(verdict.was_overridden);
    assert_eq!(verdict.overridden_rule.as_deref(), Some("daily_cap"));
    // Evaluation continued past the overridden rule to the full chain.
    assert_eq!(verdict.rules_checked.len(), 9);
    assert_eq!(verdict.rules_checked[1], "quiet_hours");
}

#[test]
fn later_non_overridable_rule_still_suppresses_after_an_override() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Critical, 0.8);
    ctx.nudges_delivered_today = 6; // fires daily_cap, overridden
    ctx.dismissals_today = 3; // fires fatigue_detection, no override

    let verdict = engine.evaluate(&ctx);
    assert!(!verdict.should_deliver);
    assert!(verdict.was_overridden);
    assert_eq!(verdict.overridden_rule.as_deref(), Some("daily_cap"));
    assert_eq!(verdict.suppressed_by.as_deref(), Some("fatigue_detection"));
}

#[test]
fn panicking_predicate_fails_open() {
    fn explodes(_: &SuppressionContext) -> Option<String> {
        panic!("predicate bug");
    }
    let mut table = rules::TABLE.to_vec();
    table.push(SuppressionRule {
        id: "explosive",
        name: "Explosive",
        priority: 0,
        overridable_by: &[],
        check: explodes,
    });
    let engine = SuppressionEngine::with_rules(table);

    let verdict = engine.evaluate(&clear_context(NudgePriority::Standard, 0.8));
    assert!(verdict.should_deliver, "a panicking rule must not suppress");
    assert_eq!(verdict.rules_checked.len(), 10);
}

// ── daily_cap ────────────────────────────────────────────────────────────

#[test]
fn daily_cap_suppresses_standard_at_five() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Standard, 0.8);
    ctx.nudges_delivered_today = 5;

    let verdict = engine.evaluate(&ctx);
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("daily_cap"));
    assert_eq!(verdict.rules_checked, vec!["daily_cap"]);
}

#[test]
fn daily_cap_passes_at_four() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Standard, 0.8);
    ctx.nudges_delivered_today = 4;
    assert!(engine.evaluate(&ctx).should_deliver);
}

// ── quiet_hours ──────────────────────────────────────────────────────────

#[test]
fn quiet_hours_wraparound_window() {
    let engine = SuppressionEngine::new();
    let quiet = QuietHours { start: 22, end: 6 };

    for (hour, suppressed) in [(23, true), (5, true), (12, false), (22, true), (6, false)] {
        let mut ctx = clear_context(NudgePriority::Standard, 0.8);
        ctx.quiet_hours = quiet;
        ctx.local_hour = hour;
        let verdict = engine.evaluate(&ctx);
        assert_eq!(
            verdict.should_deliver, !suppressed,
            "hour {hour} expected suppressed={suppressed}"
        );
        if suppressed {
            assert_eq!(verdict.suppressed_by.as_deref(), Some("quiet_hours"));
        }
    }
}

#[test]
fn quiet_hours_cannot_be_overridden_even_by_critical() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Critical, 0.8);
    ctx.local_hour = 23;
    let verdict = engine.evaluate(&ctx);
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("quiet_hours"));
}

// ── cooldown ─────────────────────────────────────────────────────────────

#[test]
fn cooldown_holds_for_two_hours() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Standard, 0.8);
    ctx.last_delivery_at = Some(ctx.now - Duration::minutes(90));
    let verdict = engine.evaluate(&ctx);
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("cooldown"));

    ctx.last_delivery_at = Some(ctx.now - Duration::hours(2));
    assert!(engine.evaluate(&ctx).should_deliver);
}

#[test]
fn cooldown_is_overridable_by_critical() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Critical, 0.8);
    ctx.last_delivery_at = Some(ctx.now - Duration::minutes(30));
    let verdict = engine.evaluate(&ctx);
    assert!(verdict.should_deliver);
    assert_eq!(verdict.overridden_rule.as_deref(), Some("cooldown"));
}

// ── fatigue_detection ────────────────────────────────────────────────────

#[test]
fn three_dismissals_read_as_fatigue() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Critical, 0.9);
    ctx.dismissals_today = 3;
    let verdict = engine.evaluate(&ctx);
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("fatigue_detection"));
}

// ── meeting_awareness ────────────────────────────────────────────────────

#[test]
fn heavy_meetings_hold_standard_nudges_only() {
    let engine = SuppressionEngine::new();

    let mut standard = clear_context(NudgePriority::Standard, 0.8);
    standard.meeting_hours_today = 3.0;
    let verdict = engine.evaluate(&standard);
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("meeting_awareness"));

    let mut adaptive = clear_context(NudgePriority::Adaptive, 0.8);
    adaptive.meeting_hours_today = 3.0;
    assert!(engine.evaluate(&adaptive).should_deliver);
}

// ── low_recovery ─────────────────────────────────────────────────────────

#[test]
fn low_recovery_goes_morning_only() {
    let engine = SuppressionEngine::new();

    let mut afternoon = clear_context(NudgePriority::Standard, 0.8);
    afternoon.recovery_score = 25;
    afternoon.local_hour = 14;
    let verdict = engine.evaluate(&afternoon);
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("low_recovery"));

    // Inside the 5-10 window the rule stands down.
    let mut morning = clear_context(NudgePriority::Standard, 0.8);
    morning.recovery_score = 25;
    morning.local_hour = 7;
    assert!(engine.evaluate(&morning).should_deliver);

    // Morning-anchor protocols pass regardless of the hour.
    let mut anchor = clear_context(NudgePriority::Standard, 0.8);
    anchor.recovery_score = 25;
    anchor.local_hour = 14;
    anchor.is_morning_anchor = true;
    assert!(engine.evaluate(&anchor).should_deliver);
}

// ── streak_respect ───────────────────────────────────────────────────────

#[test]
fn streak_coin_is_deterministic_per_day_and_streak() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    assert_eq!(hash::streak_coin(date, 10), hash::streak_coin(date, 10));

    // The decision changes only with date or streak, and across a spread of
    // inputs both outcomes occur.
    let outcomes: Vec<bool> = (7..40).map(|s| hash::streak_coin(date, s)).collect();
    assert!(outcomes.contains(&true));
    assert!(outcomes.contains(&false));
}

#[test]
fn streak_respect_is_stable_within_a_run() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Standard, 0.8);
    ctx.current_streak = 12;

    let first = engine.evaluate(&ctx);
    let second = engine.evaluate(&ctx);
    assert_eq!(first.should_deliver, second.should_deliver);
    assert_eq!(first.suppressed_by, second.suppressed_by);
}

#[test]
fn streak_coin_keys_on_the_local_date() {
    // At UTC-8, 00:30 UTC on Jun 2 is still Jun 1 locally.
    let day = UserDayState {
        local_hour: 16,
        utc_offset_minutes: -480,
        ..Default::default()
    };
    let now = Utc.with_ymd_and_hms(2025, 6, 2, 0, 30, 0).unwrap();
    let ctx = SuppressionContext::build(&day, NudgePriority::Standard, 0.8, false, false, now);
    assert_eq!(ctx.local_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
}

#[test]
fn streak_respect_holds_steady_across_utc_midnight() {
    // Same local afternoon at UTC-8, on both sides of UTC midnight.
    let engine = SuppressionEngine::new();
    let day = UserDayState {
        local_hour: 15,
        utc_offset_minutes: -480,
        current_streak: 8,
        ..Default::default()
    };
    let before = Utc.with_ymd_and_hms(2025, 6, 1, 23, 30, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2025, 6, 2, 0, 30, 0).unwrap();

    let first = engine.evaluate(&SuppressionContext::build(
        &day,
        NudgePriority::Standard,
        0.8,
        false,
        false,
        before,
    ));
    let later_day = UserDayState {
        local_hour: 16,
        ..day
    };
    let second = engine.evaluate(&SuppressionContext::build(
        &later_day,
        NudgePriority::Standard,
        0.8,
        false,
        false,
        after,
    ));
    assert_eq!(first.should_deliver, second.should_deliver);
    assert_eq!(first.suppressed_by, second.suppressed_by);
}

#[test]
fn short_streaks_are_never_held_back() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Standard, 0.8);
    ctx.current_streak = 6;
    assert!(engine.evaluate(&ctx).should_deliver);
}

// ── low_confidence ───────────────────────────────────────────────────────

#[test]
fn low_confidence_boundary_is_inclusive_on_the_pass_side() {
    let engine = SuppressionEngine::new();

    let verdict = engine.evaluate(&clear_context(NudgePriority::Standard, 0.39));
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("low_confidence"));
    assert!(
        verdict.reason.as_deref().unwrap().contains("40%"),
        "reason should name the 40% floor: {:?}",
        verdict.reason
    );

    assert!(engine.evaluate(&clear_context(NudgePriority::Standard, 0.40)).should_deliver);
}

#[test]
fn low_confidence_ignores_priority() {
    let engine = SuppressionEngine::new();
    let verdict = engine.evaluate(&clear_context(NudgePriority::Critical, 0.2));
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("low_confidence"));
}

// ── mvd_active ───────────────────────────────────────────────────────────

// ── Whole-chain property ─────────────────────────────────────────────────

proptest::proptest! {
    /// Any context yields a complete verdict: the trail is a prefix of the
    /// chain, and a suppressed verdict always names the rule and reason.
    #[test]
    fn every_context_resolves_to_a_complete_verdict(
        delivered in 0u32..10,
        dismissed in 0u32..6,
        hour in 0u32..24,
        meetings in 0.0f64..8.0,
        recovery in 0u32..=100,
        streak in 0u32..30,
        confidence in 0.0f64..=1.0,
        mvd in proptest::bool::ANY,
    ) {
        let engine = SuppressionEngine::new();
        let mut ctx = clear_context(NudgePriority::Standard, confidence);
        ctx.nudges_delivered_today = delivered;
        ctx.dismissals_today = dismissed;
        ctx.local_hour = hour;
        ctx.meeting_hours_today = meetings;
        ctx.recovery_score = recovery;
        ctx.current_streak = streak;
        ctx.mvd_active = mvd;

        let verdict = engine.evaluate(&ctx);
        proptest::prop_assert!(!verdict.rules_checked.is_empty());
        proptest::prop_assert!(verdict.rules_checked.len() <= 9);
        if verdict.should_deliver {
            proptest::prop_assert_eq!(verdict.rules_checked.len(), 9);
            proptest::prop_assert!(verdict.suppressed_by.is_none());
        } else {
            proptest::prop_assert!(verdict.suppressed_by.is_some());
            proptest::prop_assert!(verdict.reason.is_some());
        }
    }
}

#[test]
fn mvd_mode_blocks_unapproved_nudges() {
    let engine = SuppressionEngine::new();
    let mut ctx = clear_context(NudgePriority::Critical, 0.9);
    ctx.mvd_active = true;
    let verdict = engine.evaluate(&ctx);
    assert!(!verdict.should_deliver);
    assert_eq!(verdict.suppressed_by.as_deref(), Some("mvd_active"));

    ctx.mvd_approved = true;
    assert!(engine.evaluate(&ctx).should_deliver);
}
