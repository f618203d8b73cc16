//! Past-failure detection for per-tag minimums.

use super::{scope, EPSILON};
use crate::course::{CourseConfig, RuleKind};

/// A graded assessment that already falls below a per-tag minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct HardFailure {
    pub assessment: String,
    pub grade: f64,
    pub rule_description: String,
    pub target: f64,
}

impl HardFailure {
    /// Human-readable explanation naming the assessment, grade, rule and target.
    pub fn message(&self) -> String {
        format!(
            "Broken rule: {}. You have {} on '{}' (minimum: {})",
            self.rule_description, self.grade, self.assessment, self.target
        )
    }
}

/// Returns the first graded assessment that violates a `MinGradePerTag` rule.
///
/// Rules are scanned in order, and within a rule the assessments in order.
/// A grade is a violation when it is below `target - EPSILON`.
pub fn check_past_failures(config: &CourseConfig) -> Option<HardFailure> {
    config
        .rules
        .iter()
        .filter(|rule| rule.kind == RuleKind::MinGradePerTag)
        .find_map(|rule| {
            scope(rule, &config.assessments).find_map(|a| match a.grade {
                Some(grade) if grade < rule.target - EPSILON => Some(HardFailure {
                    assessment: a.name.clone(),
                    grade,
                    rule_description: rule.description.clone(),
                    target: rule.target,
                }),
                _ => None,
            })
        })
}
