//! Course configuration: the single root input of the engine.

use super::types::{Assessment, Rule, Strategy};
use std::collections::HashSet;
#[cfg(feature = "serde")]
use std::path::Path;
use thiserror::Error;

/// Error raised while loading a course configuration.
///
/// The engine itself never fails; these errors only come from the
/// decoding and validation helpers used by adapters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A course: its rules, its assessments, and the strategy to solve with.
///
/// # Examples
///
/// ```
/// use u_grade::course::{Assessment, CourseConfig, Rule, Strategy};
///
/// let config = CourseConfig::new("Algebra")
///     .with_strategy(Strategy::HeaviestFocus)
///     .with_rule(Rule::global_average(60.0).with_description("Pass"))
///     .with_assessment(Assessment::new("Midterm", 40.0).with_grade(55.0))
///     .with_assessment(Assessment::new("Final", 60.0));
///
/// assert_eq!(config.ungraded().count(), 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CourseConfig {
    /// Course name, used only for reporting.
    pub name: String,

    /// Solver used to propose grades.
    pub strategy: Strategy,

    /// Rules, in evaluation and reporting order.
    pub rules: Vec<Rule>,

    /// Assessments, in reporting order.
    pub assessments: Vec<Assessment>,
}

impl CourseConfig {
    /// Creates an empty course with the uniform strategy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_assessment(mut self, assessment: Assessment) -> Self {
        self.assessments.push(assessment);
        self
    }

    /// Iterates over the assessments that still need a grade.
    pub fn ungraded(&self) -> impl Iterator<Item = &Assessment> {
        self.assessments.iter().filter(|a| !a.is_graded())
    }

    /// Looks up an assessment by name.
    pub fn assessment(&self, name: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.name == name)
    }

    /// Validates structural integrity of the configuration.
    ///
    /// Checks for empty or duplicate assessment names and non-finite or
    /// negative numbers. Weight sums are deliberately not checked.
    /// [`calculate`](crate::calculator::calculate) never calls this; it is
    /// meant for adapters that want to reject bad input early.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for a in &self.assessments {
            if a.name.is_empty() {
                return Err("assessment name must not be empty".into());
            }
            if !seen.insert(a.name.as_str()) {
                return Err(format!("duplicate assessment name '{}'", a.name));
            }
            if !a.weight.is_finite() || a.weight < 0.0 {
                return Err(format!(
                    "weight of '{}' must be a non-negative number, got {}",
                    a.name, a.weight
                ));
            }
            if let Some(g) = a.grade {
                if !g.is_finite() {
                    return Err(format!("grade of '{}' must be finite, got {g}", a.name));
                }
            }
        }
        for rule in &self.rules {
            if !rule.target.is_finite() {
                return Err(format!(
                    "target of rule '{}' must be finite, got {}",
                    rule.description, rule.target
                ));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl CourseConfig {
    /// Decodes a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use u_grade::course::{CourseConfig, Strategy};
    ///
    /// let config = CourseConfig::from_json_str(r#"{
    ///     "name": "Physics",
    ///     "strategy": "heaviest_focus",
    ///     "rules": [{ "type": "global_average", "target": 55, "tag_filter": null }],
    ///     "assessments": [{ "name": "Exam", "weight": 100, "grade": null }]
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.strategy, Strategy::HeaviestFocus);
    /// assert!(config.assessments[0].tags.is_empty());
    /// ```
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decodes and then [validates](Self::validate) a configuration.
    pub fn from_json_str_validated(s: &str) -> Result<Self, ConfigError> {
        let config = Self::from_json_str(s)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Reads and decodes a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
