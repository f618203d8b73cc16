//! Core trait shared by the grade solvers.

use crate::course::CourseConfig;
use std::collections::BTreeMap;

/// Grades proposed by a solver for the ungraded assessments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Proposal {
    /// Assessment name to proposed grade, one entry per ungraded assessment.
    ///
    /// Values are never negative but may exceed 100, which signals that no
    /// real grade satisfies the rules.
    pub proposed_grades: BTreeMap<String, f64>,

    /// Description of the rule that drives the proposal, for reporting.
    pub limiting_rule: String,
}

impl Proposal {
    /// Largest proposed grade, or 0 when nothing is ungraded.
    pub fn max_grade(&self) -> f64 {
        max_grade(&self.proposed_grades)
    }
}

/// Largest value of a proposed-grade map, or 0 when it is empty.
pub fn max_grade(proposed_grades: &BTreeMap<String, f64>) -> f64 {
    proposed_grades.values().fold(0.0_f64, |acc, &g| acc.max(g))
}

/// A solver that proposes grades for every ungraded assessment.
///
/// Implementations read the configuration only; existing grades are
/// never changed. The hard-constraint check has already passed when
/// [`solve`](Self::solve) is called from the calculator.
///
/// # Examples
///
/// ```
/// use u_grade::course::{Assessment, CourseConfig, Rule};
/// use u_grade::strategy::{GradeStrategy, UniformSolver};
///
/// let config = CourseConfig::new("c")
///     .with_rule(Rule::global_average(60.0))
///     .with_assessment(Assessment::new("Exam", 100.0));
///
/// let proposal = UniformSolver.solve(&config);
/// assert!((proposal.proposed_grades["Exam"] - 60.0).abs() < 1e-10);
/// ```
pub trait GradeStrategy: Send + Sync {
    /// Returns the human-readable name of this strategy.
    fn label(&self) -> &str;

    /// Proposes a grade for every ungraded assessment.
    fn solve(&self, config: &CourseConfig) -> Proposal;
}

/// Limiting-rule label used when no rule constrains anything.
pub(crate) const NO_LIMITING_RULE: &str = "None";
