//! JSON entry point for hosts that exchange text.

use super::runner::{CalculationResult, Calculator};
use crate::course::CourseConfig;
use tracing::warn;

/// Response returned by [`solve_json`] when the input cannot be decoded.
pub const INVALID_INPUT_RESPONSE: &str = r#"{"error":"Invalid Input"}"#;

impl CalculationResult {
    /// Encodes the result as compact JSON.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Decodes a course from JSON, calculates it, and encodes the result.
///
/// Decode failures yield [`INVALID_INPUT_RESPONSE`]; the cause is only
/// logged.
///
/// ```
/// use u_grade::calculator::{solve_json, INVALID_INPUT_RESPONSE};
///
/// let out = solve_json(r#"{
///     "rules": [{ "type": "global_average", "target": 60 }],
///     "assessments": [{ "name": "Exam", "weight": 100 }]
/// }"#);
/// assert!(out.contains(r#""status":"possible""#));
///
/// assert_eq!(solve_json("nope"), INVALID_INPUT_RESPONSE);
/// ```
pub fn solve_json(input: &str) -> String {
    let config = match CourseConfig::from_json_str(input) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "rejecting course input");
            return INVALID_INPUT_RESPONSE.to_string();
        }
    };
    Calculator::calculate(&config)
        .to_json_string()
        .unwrap_or_else(|e| {
            warn!(error = %e, "could not encode calculation result");
            INVALID_INPUT_RESPONSE.to_string()
        })
}
