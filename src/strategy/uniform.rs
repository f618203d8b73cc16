//! Uniform multi-objective solver.
//!
//! Answers "what do I need on this one item?" for every ungraded
//! assessment independently. For each averaging rule the item belongs to,
//! the ungraded weight of the rule's scope is treated as a single unknown:
//!
//! ```text
//! needed = (target * scope_weight - graded_points) / ungraded_weight
//! ```
//!
//! A per-tag minimum contributes its target directly. The item's proposal
//! is the largest of these requirements, floored at 0.

use super::types::{GradeStrategy, Proposal, NO_LIMITING_RULE};
use crate::course::{Assessment, CourseConfig, Rule, RuleKind};
use crate::rules::{applies, scope};
use std::collections::BTreeMap;
use tracing::debug;

/// Ungraded scope weight below which a rule cannot be solved for.
const MIN_REMAINING_WEIGHT: f64 = 1e-4;

/// Blame assigned to an item that no rule pushes above 0.
const BASE_REQUIREMENT: &str = "Base";

/// Solves each ungraded assessment independently against every rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSolver;

impl GradeStrategy for UniformSolver {
    fn label(&self) -> &str {
        "Uniform Multi-Objective"
    }

    fn solve(&self, config: &CourseConfig) -> Proposal {
        let mut proposed_grades = BTreeMap::new();
        let mut limiting_rule = NO_LIMITING_RULE.to_string();
        let mut max_required = f64::NEG_INFINITY;

        for item in config.ungraded() {
            let (required, blame) = requirement_for(item, config);
            debug!(item = %item.name, required, blame, "uniform requirement");

            proposed_grades.insert(item.name.clone(), required.max(0.0));
            if required > max_required {
                max_required = required;
                limiting_rule = blame.to_string();
            }
        }

        Proposal {
            proposed_grades,
            limiting_rule,
        }
    }
}

/// Largest requirement any rule places on `item`, with the responsible rule.
fn requirement_for<'a>(item: &Assessment, config: &'a CourseConfig) -> (f64, &'a str) {
    let mut required = 0.0;
    let mut blame = BASE_REQUIREMENT;

    for rule in &config.rules {
        if !applies(rule, item) {
            continue;
        }
        let needed = match rule.kind {
            RuleKind::MinGradePerTag => Some(rule.target),
            RuleKind::GlobalAverage | RuleKind::TagAverage => needed_on_remaining(rule, config),
        };
        if let Some(needed) = needed {
            if needed > required {
                required = needed;
                blame = rule.description.as_str();
            }
        }
    }

    (required, blame)
}

/// Grade the ungraded part of `rule`'s scope must average to reach its target.
///
/// Returns `None` when the scope has no weight left to solve for.
fn needed_on_remaining(rule: &Rule, config: &CourseConfig) -> Option<f64> {
    let mut total_weight = 0.0;
    let mut graded_weight = 0.0;
    let mut graded_points = 0.0;

    for a in scope(rule, &config.assessments) {
        total_weight += a.weight;
        if let Some(grade) = a.grade {
            graded_weight += a.weight;
            graded_points += grade * a.weight;
        }
    }

    let remaining = total_weight - graded_weight;
    if total_weight <= 0.0 || remaining <= MIN_REMAINING_WEIGHT {
        return None;
    }
    Some((rule.target * total_weight - graded_points) / remaining)
}
