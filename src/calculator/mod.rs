//! Calculation orchestrator.
//!
//! The single pure entry point of the engine is [`calculate`]:
//!
//! ```text
//! check past failures ──fires──▶ impossible (all proposals 0)
//!         │
//!         ▼
//! strategy solver ─▶ rule statuses ─▶ verdict from the largest proposal
//! ```
//!
//! Verdict: a proposal above 100 means impossible, all proposals within
//! [`EPSILON`](crate::rules::EPSILON) of 0 mean guaranteed, anything else
//! is possible.
//!
//! With the `serde` feature, [`solve_json`] wraps the pipeline for hosts
//! that exchange JSON text.

#[cfg(feature = "serde")]
mod json;
mod runner;

#[cfg(feature = "serde")]
pub use json::{solve_json, INVALID_INPUT_RESPONSE};
pub use runner::{calculate, CalculationResult, Calculator};
