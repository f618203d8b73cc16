//! Grade requirement solver.
//!
//! Given a course with partially graded assessments and a set of target
//! rules, computes what grade is still needed on each ungraded assessment,
//! or whether the rules are already guaranteed or already impossible.
//!
//! - **Course model**: assessments with weights, optional grades and tags;
//!   rules of three kinds (global average, tag average, per-tag minimum).
//! - **Rules**: scope matching and the hard-constraint check that stops a
//!   calculation when a graded item already breaks a per-tag minimum.
//! - **Strategies**: two interchangeable solvers. *Uniform* solves every
//!   ungraded item independently; *Heaviest Focus* pushes all remaining
//!   effort onto the heaviest ungraded item.
//! - **Status**: per-rule guaranteed / possible / impossible classification.
//! - **Calculator**: runs the pipeline and derives the overall verdict.
//! - **Report**: plain-text rendering of a result.
//!
//! # Example
//!
//! ```
//! use u_grade::calculator::calculate;
//! use u_grade::course::{Assessment, CourseConfig, Rule, Strategy};
//! use u_grade::status::Status;
//!
//! let config = CourseConfig::new("Databases")
//!     .with_strategy(Strategy::HeaviestFocus)
//!     .with_rule(Rule::global_average(50.0).with_description("Pass the course"))
//!     .with_assessment(Assessment::new("Project", 20.0))
//!     .with_assessment(Assessment::new("Exam", 80.0));
//!
//! let result = calculate(&config);
//! assert_eq!(result.status, Status::Possible);
//! assert!((result.proposed_grades["Exam"] - 62.5).abs() < 1e-10);
//! assert_eq!(result.proposed_grades["Project"], 0.0);
//! ```
//!
//! # Features
//!
//! - `serde` (default): JSON decoding of courses and encoding of results.
//! - `parallel`: [`Calculator::calculate_batch`](calculator::Calculator::calculate_batch)
//!   runs on the rayon thread pool.
//! - `wasm`: `wasm-bindgen` exports.
//!
//! The engine is pure and synchronous: no I/O, no shared state. Logging
//! goes through `tracing`; install a subscriber to see it.

pub mod calculator;
pub mod course;
pub mod report;
pub mod rules;
pub mod status;
pub mod strategy;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use calculator::{calculate, CalculationResult, Calculator};
pub use course::{Assessment, CourseConfig, Rule, RuleKind, Strategy};
pub use status::{RuleStatus, Status};
