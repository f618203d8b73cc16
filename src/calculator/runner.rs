//! Calculation pipeline.
//!
//! [`Calculator`] sequences the engine: hard-constraint check → strategy
//! solver → rule status evaluation → overall verdict.

use crate::course::{CourseConfig, RuleKind};
use crate::rules::{check_past_failures, EPSILON, MAX_GRADE};
use crate::status::{evaluate_rules, RuleStatus, Status};
use crate::strategy::{max_grade, solver_for, Proposal};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Outcome of a calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    /// Label of the strategy that produced the proposals.
    pub strategy_used: String,

    /// Overall verdict.
    pub status: Status,

    /// Human-readable explanation of the verdict.
    pub message: String,

    /// Description of the rule that drives the verdict.
    pub limiting_rule_description: String,

    /// Current score of the first global-average rule, or 0 without one.
    pub current_global_score: f64,

    /// Proposed grade for every ungraded assessment, keyed by name.
    pub proposed_grades: BTreeMap<String, f64>,

    /// One status per rule, in rule order.
    pub rule_statuses: Vec<RuleStatus>,
}

impl CalculationResult {
    /// Status of the first global-average rule, if there is one.
    pub fn global_rule_status(&self) -> Option<&RuleStatus> {
        first_global(&self.rule_statuses)
    }

    /// Largest proposed grade, or 0 when nothing is ungraded.
    pub fn max_proposed_grade(&self) -> f64 {
        max_grade(&self.proposed_grades)
    }
}

/// Runs the grade calculation pipeline.
///
/// # Examples
///
/// ```
/// use u_grade::calculator::Calculator;
/// use u_grade::course::{Assessment, CourseConfig, Rule};
/// use u_grade::status::Status;
///
/// let config = CourseConfig::new("Chemistry")
///     .with_rule(Rule::global_average(70.0).with_description("Pass"))
///     .with_assessment(Assessment::new("Midterm", 50.0).with_grade(90.0))
///     .with_assessment(Assessment::new("Final", 50.0));
///
/// let result = Calculator::calculate(&config);
/// assert_eq!(result.status, Status::Possible);
/// assert!((result.proposed_grades["Final"] - 50.0).abs() < 1e-10);
/// ```
pub struct Calculator;

impl Calculator {
    /// Computes the proposals, rule statuses and verdict for one course.
    pub fn calculate(config: &CourseConfig) -> CalculationResult {
        let solver = solver_for(config.strategy);
        debug!(
            course = %config.name,
            strategy = solver.label(),
            rules = config.rules.len(),
            assessments = config.assessments.len(),
            "calculating"
        );

        if let Some(failure) = check_past_failures(config) {
            info!(
                assessment = %failure.assessment,
                grade = failure.grade,
                target = failure.target,
                "graded assessment already below its minimum"
            );
            let proposed_grades: BTreeMap<String, f64> = config
                .ungraded()
                .map(|a| (a.name.clone(), 0.0))
                .collect();
            let rule_statuses = evaluate_rules(config, &proposed_grades);
            return CalculationResult {
                strategy_used: solver.label().to_string(),
                status: Status::Impossible,
                message: failure.message(),
                limiting_rule_description: failure.rule_description,
                current_global_score: global_score(&rule_statuses),
                proposed_grades,
                rule_statuses,
            };
        }

        let proposal = solver.solve(config);
        let max_proposed = proposal.max_grade();
        let Proposal {
            proposed_grades,
            limiting_rule,
        } = proposal;
        let rule_statuses = evaluate_rules(config, &proposed_grades);

        let (status, message) = verdict(max_proposed, &limiting_rule);
        debug!(%status, max_proposed, limiting_rule = %limiting_rule, "verdict");

        CalculationResult {
            strategy_used: solver.label().to_string(),
            status,
            message,
            limiting_rule_description: limiting_rule,
            current_global_score: global_score(&rule_statuses),
            proposed_grades,
            rule_statuses,
        }
    }

    /// Calculates many courses. Output order matches input order.
    ///
    /// With the `parallel` feature the courses are spread over the rayon
    /// thread pool.
    pub fn calculate_batch(configs: &[CourseConfig]) -> Vec<CalculationResult> {
        #[cfg(feature = "parallel")]
        {
            configs.par_iter().map(Self::calculate).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            configs.iter().map(Self::calculate).collect()
        }
    }
}

/// Computes the proposals, rule statuses and verdict for one course.
///
/// Shorthand for [`Calculator::calculate`].
pub fn calculate(config: &CourseConfig) -> CalculationResult {
    Calculator::calculate(config)
}

fn first_global(statuses: &[RuleStatus]) -> Option<&RuleStatus> {
    statuses.iter().find(|s| s.kind == RuleKind::GlobalAverage)
}

/// Current score of the first global-average rule, 0 if there is none.
fn global_score(statuses: &[RuleStatus]) -> f64 {
    first_global(statuses).map_or(0.0, |s| s.current_score)
}

/// Overall verdict from the largest proposed grade.
fn verdict(max_grade: f64, limiting_rule: &str) -> (Status, String) {
    if max_grade > MAX_GRADE {
        (
            Status::Impossible,
            format!("Requires a grade above 100 ({limiting_rule})"),
        )
    } else if max_grade <= EPSILON {
        (Status::Guaranteed, "Passed with minimums.".to_string())
    } else {
        (
            Status::Possible,
            format!("Main limiting rule: {limiting_rule}"),
        )
    }
}
