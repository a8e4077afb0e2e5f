mod rules;

pub use rules::ScoringRule;

use super::domain::Receipt;
use serde::Serialize;

/// Applies the fixed rule set to receipts. Rules never see each other's results.
#[derive(Debug, Clone)]
pub struct RuleEvaluator {
    rules: Vec<ScoringRule>,
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEvaluator {
    pub fn new() -> Self {
        Self {
            rules: ScoringRule::ALL.to_vec(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_rules(rules: Vec<ScoringRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    pub fn calculate_score(&self, receipt: &Receipt) -> u64 {
        self.rules
            .iter()
            .fold(0, |total: u64, rule| total.saturating_add(rule.score(receipt)))
    }

    /// Per-rule contributions in evaluation order; they sum to [`Self::calculate_score`].
    pub fn breakdown(&self, receipt: &Receipt) -> Vec<RuleContribution> {
        self.rules
            .iter()
            .map(|rule| RuleContribution {
                rule: *rule,
                label: rule.label(),
                points: rule.score(receipt),
            })
            .collect()
    }
}

/// One rule's share of a receipt's score, kept so totals can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: ScoringRule,
    pub label: &'static str,
    pub points: u64,
}

/// Sum of a breakdown, saturating at `u64::MAX` like [`RuleEvaluator::calculate_score`].
pub fn sum_contributions(breakdown: &[RuleContribution]) -> u64 {
    breakdown
        .iter()
        .fold(0, |total: u64, entry| total.saturating_add(entry.points))
}
