//! Rule scoping and hard-constraint checks.
//!
//! - [`applies`]: decides whether a rule governs an assessment
//! - [`check_past_failures`]: detects graded assessments that already
//!   break a per-tag minimum, which no future grade can repair
//!
//! All threshold comparisons in the crate go through [`EPSILON`].

mod hard;
mod matcher;

pub use hard::{check_past_failures, HardFailure};
pub use matcher::{applies, scope};

/// Tolerance for every target/threshold comparison.
pub const EPSILON: f64 = 1e-3;

/// Highest achievable grade. A proposal above it means "impossible".
pub const MAX_GRADE: f64 = 100.0;

/// Divides, yielding 0 when the denominator is not positive.
pub(crate) fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
