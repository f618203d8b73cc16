//! Course domain model.
//!
//! A [`CourseConfig`] owns an ordered list of [`Rule`]s and an ordered list
//! of [`Assessment`]s. It is created by the caller (directly or from JSON
//! with the `serde` feature) and only ever read by the engine.
//!
//! # Key Types
//!
//! - [`Assessment`]: weighted coursework item, graded or not
//! - [`Rule`] / [`RuleKind`]: global average, tag average, per-tag minimum
//! - [`Strategy`]: which solver fills in the ungraded items
//! - [`CourseConfig`]: the root input, with builders and validation

mod config;
mod types;

pub use config::{ConfigError, CourseConfig};
pub use types::{Assessment, Rule, RuleKind, Strategy};
