//! Per-rule status evaluation.
//!
//! Classifies every rule as [`Status::Guaranteed`], [`Status::Possible`] or
//! [`Status::Impossible`] given the actual grades and a solver's proposal.

mod evaluator;

pub use evaluator::{evaluate_rule, evaluate_rules, RuleStatus};

use std::fmt;

/// Tri-state outcome of a rule or of a whole course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// Already satisfied by the existing grades.
    Guaranteed,
    /// Satisfiable with achievable future grades.
    Possible,
    /// No achievable future grade satisfies it.
    Impossible,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Guaranteed => "guaranteed",
            Status::Possible => "possible",
            Status::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
