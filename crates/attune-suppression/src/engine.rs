//! Rule chain evaluation.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::context::SuppressionContext;
use crate::rule::SuppressionRule;
use crate::rules;

/// Outcome of one chain evaluation: the verdict plus the audit trail.
#[derive(Debug, Clone)]
pub struct SuppressionVerdict {
    pub should_deliver: bool,
    /// Rule ids in the order they were evaluated.
    pub rules_checked: Vec<String>,
    /// Rule that terminated evaluation, when suppression won.
    pub suppressed_by: Option<String>,
    pub reason: Option<String>,
    /// Whether any firing rule was overridden by nudge priority.
    pub was_overridden: bool,
    /// First rule that was overridden.
    pub overridden_rule: Option<String>,
}

/// The Suppression Engine: a single pass over the fixed rule table.
pub struct SuppressionEngine {
    rules: Vec<SuppressionRule>,
}

impl SuppressionEngine {
    /// Build with the fixed nine-rule table, sorted ascending by priority.
    pub fn new() -> Self {
        Self::with_rules(rules::TABLE.to_vec())
    }

    /// Build with a custom rule set (tests use this to inject predicates).
    pub fn with_rules(mut rules: Vec<SuppressionRule>) -> Self {
        rules.sort_by_key(|r| r.priority);
        Self { rules }
    }

    pub fn rules(&self) -> &[SuppressionRule] {
        &self.rules
    }

    /// Evaluate the chain against one context snapshot.
    ///
    /// A firing overridable rule whose override set contains the nudge
    /// priority is recorded and skipped: evaluation continues, and a later
    /// rule can still suppress. A firing rule that cannot be overridden
    /// ends evaluation immediately. A panicking predicate is treated as
    /// non-suppressing (fail open) and logged; the decision always
    /// completes.
    pub fn evaluate(&self, ctx: &SuppressionContext) -> SuppressionVerdict {
        let mut rules_checked = Vec::with_capacity(self.rules.len());
        let mut was_overridden = false;
        let mut overridden_rule: Option<String> = None;

        for rule in &self.rules {
            rules_checked.push(rule.id.to_string());

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| (rule.check)(ctx)));
            let fired = match outcome {
                Ok(fired) => fired,
                Err(_) => {
                    warn!(rule = rule.id, "rule predicate panicked, failing open");
                    None
                }
            };

            let Some(reason) = fired else {
                continue;
            };

            if rule.can_be_overridden() && rule.overridden_by(ctx.priority) {
                debug!(rule = rule.id, priority = ?ctx.priority, "rule overridden");
                if !was_overridden {
                    was_overridden = true;
                    overridden_rule = Some(rule.id.to_string());
                }
                continue;
            }

            debug!(rule = rule.id, %reason, "nudge suppressed");
            return SuppressionVerdict {
                should_deliver: false,
                rules_checked,
                suppressed_by: Some(rule.id.to_string()),
                reason: Some(reason),
                was_overridden,
                overridden_rule,
            };
        }

        SuppressionVerdict {
            should_deliver: true,
            rules_checked,
            suppressed_by: None,
            reason: None,
            was_overridden,
            overridden_rule,
        }
    }
}

impl Default for SuppressionEngine {
    fn default() -> Self {
        Self::new()
    }
}
