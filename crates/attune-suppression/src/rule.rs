//! The rule record.

use attune_core::models::NudgePriority;

use crate::context::SuppressionContext;

/// A rule predicate: `Some(reason)` = suppress, `None` = pass.
/// Predicates are pure functions over the context snapshot.
pub type RuleCheck = fn(&SuppressionContext) -> Option<String>;

/// A tagged rule record. Rules are static, registered once, and evaluated
/// in ascending `priority` order; never mutated at runtime.
#[derive(Clone, Copy)]
pub struct SuppressionRule {
    pub id: &'static str,
    pub name: &'static str,
    /// Lower priority is evaluated first.
    pub priority: u8,
    /// Priorities allowed to override this rule. Empty = not overridable.
    pub overridable_by: &'static [NudgePriority],
    pub check: RuleCheck,
}

impl SuppressionRule {
    pub fn can_be_overridden(&self) -> bool {
        !self.overridable_by.is_empty()
    }

    /// Whether a nudge of `priority` may pass this rule when it fires.
    pub fn overridden_by(&self, priority: NudgePriority) -> bool {
        self.overridable_by.contains(&priority)
    }
}

impl std::fmt::Debug for SuppressionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuppressionRule")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("overridable_by", &self.overridable_by)
            .finish()
    }
}
