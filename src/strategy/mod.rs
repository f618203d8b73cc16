//! Grade solvers.
//!
//! Two interchangeable solvers implement [`GradeStrategy`]. Each takes a
//! [`CourseConfig`](crate::course::CourseConfig) and returns a
//! [`Proposal`]: a grade for every ungraded assessment plus the rule that
//! limits it.
//!
//! - [`UniformSolver`]: every ungraded item is solved independently; the
//!   worst rule it belongs to sets its grade.
//! - [`HeaviestFocusSolver`]: per-tag minimums are seeded, then every
//!   shortfall is pushed onto the heaviest ungraded item.
//!
//! Proposals are floored at 0 but never capped at 100. A value above 100
//! is how a solver reports that the rules cannot be met.

mod heaviest;
mod types;
mod uniform;

pub use heaviest::HeaviestFocusSolver;
pub use types::{max_grade, GradeStrategy, Proposal};
pub use uniform::UniformSolver;

use crate::course::Strategy;

/// Returns the solver selected by `strategy`.
pub fn solver_for(strategy: Strategy) -> &'static dyn GradeStrategy {
    match strategy {
        Strategy::Uniform => &UniformSolver,
        Strategy::HeaviestFocus => &HeaviestFocusSolver,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_for() {
        assert_eq!(solver_for(Strategy::Uniform).label(), "Uniform Multi-Objective");
        assert_eq!(
            solver_for(Strategy::HeaviestFocus).label(),
            "Heaviest Focus (Lazy)"
        );
    }

    #[test]
    fn test_max_grade() {
        let mut p = Proposal::default();
        assert_eq!(p.max_grade(), 0.0);
        p.proposed_grades.insert("a".into(), 12.0);
        p.proposed_grades.insert("b".into(), 140.0);
        assert!((p.max_grade() - 140.0).abs() < 1e-10);
    }
}
