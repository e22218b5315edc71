use chrono::{Duration, Utc};
use proptest::prelude::*;

use attune_core::memory::{Confidence, Memory, MemoryType};
use attune_memory::{decay, relevance, RetrievalContext};

fn raw_memory(confidence: f64, decay_rate: f64, days_since_decay: i64) -> Memory {
    let now = Utc::now();
    Memory {
        id: "m".to_string(),
        user_id: "ada".to_string(),
        memory_type: MemoryType::PatternDetected,
        content: "a recurring pattern".to_string(),
        context: None,
        confidence: Confidence::new(confidence),
        evidence_count: 1,
        decay_rate,
        created_at: now - Duration::days(days_since_decay),
        last_used_at: now,
        last_decayed_at: now - Duration::days(days_since_decay),
        expires_at: None,
        source_nudge_id: None,
        source_protocol_id: None,
        metadata: Default::default(),
    }
}

proptest! {
    #[test]
    fn reinforcement_is_bounded_and_monotone(c in 0.0f64..=1.0) {
        let before = Confidence::new(c);
        let after = before.reinforced();
        prop_assert!(after.value() <= 0.95);
        prop_assert!(after.value() >= before.value().min(0.95));
    }

    #[test]
    fn decayed_confidence_stays_in_unit_interval(
        c in 0.0f64..=1.0,
        rate in 0.01f64..=0.1,
        days in 2i64..=1000,
    ) {
        let mut m = raw_memory(c, rate, days);
        let before = m.confidence.value();
        decay::apply(&mut m, Utc::now());
        prop_assert!((0.0..=1.0).contains(&m.confidence.value()));
        prop_assert!(m.confidence.value() <= before + f64::EPSILON);
    }

    #[test]
    fn relevance_never_exceeds_one(
        c in 0.0f64..=1.0,
        evidence in 1u32..=20,
        days_unused in 0i64..=100,
    ) {
        let mut m = raw_memory(c, 0.05, 0);
        m.evidence_count = evidence;
        m.last_used_at = Utc::now() - Duration::days(days_unused);
        let score = relevance::score(&m, &RetrievalContext::bare(Utc::now()));
        prop_assert!((0.0..=1.0).contains(&score));
    }
}
