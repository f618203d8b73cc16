//! Rule status evaluator.

use super::Status;
use crate::course::{CourseConfig, Rule, RuleKind};
use crate::rules::{safe_div, scope, EPSILON, MAX_GRADE};
use std::collections::BTreeMap;

/// Evaluated state of one rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleStatus {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: RuleKind,

    pub target: f64,

    pub tag_filter: Option<String>,

    /// Score from actual grades only.
    ///
    /// Weighted average for `GlobalAverage`, arithmetic mean for
    /// `TagAverage`, always 0 for `MinGradePerTag`.
    pub current_score: f64,

    pub status: Status,
}

/// Evaluates every rule of `config`, in rule order.
pub fn evaluate_rules(config: &CourseConfig, proposed: &BTreeMap<String, f64>) -> Vec<RuleStatus> {
    config
        .rules
        .iter()
        .map(|rule| evaluate_rule(rule, config, proposed))
        .collect()
}

/// Evaluates a single rule against actual grades and `proposed` grades.
///
/// An ungraded assessment missing from `proposed` counts as 0.
pub fn evaluate_rule(
    rule: &Rule,
    config: &CourseConfig,
    proposed: &BTreeMap<String, f64>,
) -> RuleStatus {
    let proposal = |name: &str| proposed.get(name).copied().unwrap_or(0.0);
    let below_target = |score: f64| score < rule.target - EPSILON;

    let (current_score, status) = match rule.kind {
        RuleKind::GlobalAverage => {
            let mut total_weight = 0.0;
            let mut current_points = 0.0;
            let mut projected_points = 0.0;
            for a in scope(rule, &config.assessments) {
                total_weight += a.weight;
                match a.grade {
                    Some(grade) => {
                        current_points += grade * a.weight;
                        projected_points += grade * a.weight;
                    }
                    None => projected_points += proposal(&a.name) * a.weight,
                }
            }
            let current = safe_div(current_points, total_weight);
            let projected = safe_div(projected_points, total_weight);

            let status = if !below_target(current) {
                Status::Guaranteed
            } else if below_target(projected) {
                Status::Impossible
            } else {
                Status::Possible
            };
            (current, status)
        }

        RuleKind::TagAverage => {
            let mut graded_sum = 0.0;
            let mut graded_count = 0usize;
            let mut projected_sum = 0.0;
            let mut total_count = 0usize;
            for a in scope(rule, &config.assessments) {
                total_count += 1;
                match a.grade {
                    Some(grade) => {
                        graded_sum += grade;
                        graded_count += 1;
                        projected_sum += grade;
                    }
                    None => projected_sum += proposal(&a.name),
                }
            }
            let current = safe_div(graded_sum, graded_count as f64);
            let projected = safe_div(projected_sum, total_count as f64);

            let status = if graded_count == total_count && !below_target(current) {
                Status::Guaranteed
            } else if below_target(projected) {
                Status::Impossible
            } else {
                Status::Possible
            };
            (current, status)
        }

        RuleKind::MinGradePerTag => {
            let mut all_graded = true;
            let mut any_broken = false;
            let mut any_unreachable = false;
            for a in scope(rule, &config.assessments) {
                match a.grade {
                    Some(grade) => any_broken |= below_target(grade),
                    None => {
                        all_graded = false;
                        any_unreachable |= proposal(&a.name) > MAX_GRADE;
                    }
                }
            }

            let status = if any_broken {
                Status::Impossible
            } else if all_graded {
                Status::Guaranteed
            } else if any_unreachable {
                Status::Impossible
            } else {
                Status::Possible
            };
            (0.0, status)
        }
    };

    RuleStatus {
        kind: rule.kind,
        target: rule.target,
        tag_filter: rule.tag_filter.clone(),
        current_score,
        status,
    }
}
