//! Assessments, rules, and strategy selection.

/// A single graded (or still-to-be-graded) piece of coursework.
///
/// `weight` is relative: it only matters against the weights of the other
/// assessments inside the scope of a given rule.
///
/// # Examples
///
/// ```
/// use u_grade::course::Assessment;
///
/// let exam = Assessment::new("Final exam", 40.0).with_tag("exam");
/// assert!(!exam.is_graded());
///
/// let quiz = Assessment::new("Quiz 1", 10.0).with_grade(85.0);
/// assert_eq!(quiz.grade, Some(85.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Assessment {
    /// Unique, non-empty name.
    pub name: String,

    /// Relative weight, non-negative.
    pub weight: f64,

    /// Actual grade, or `None` if the engine should solve for it.
    pub grade: Option<f64>,

    /// Tags used by tag-scoped rules. Order and duplicates are irrelevant.
    pub tags: Vec<String>,
}

impl Assessment {
    /// Creates an ungraded assessment with no tags.
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            grade: None,
            tags: Vec::new(),
        }
    }

    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Returns `true` if an actual grade is already recorded.
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Returns `true` if `tag` is among this assessment's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The kind of requirement a [`Rule`] expresses.
///
/// Averaging kinds (`GlobalAverage`, `TagAverage`) constrain a mean over a
/// scope. `MinGradePerTag` is a predicate on every item of its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleKind {
    /// Weighted average over every assessment must reach the target.
    #[default]
    GlobalAverage,

    /// Average over the assessments carrying the tag must reach the target.
    TagAverage,

    /// Every assessment carrying the tag must individually reach the target.
    MinGradePerTag,
}

impl RuleKind {
    /// Returns `true` for the kinds that constrain a mean.
    pub fn is_average(self) -> bool {
        !matches!(self, RuleKind::MinGradePerTag)
    }
}

/// A target the course outcome must satisfy.
///
/// # Examples
///
/// ```
/// use u_grade::course::{Rule, RuleKind};
///
/// let rule = Rule::tag_average("lab", 55.0).with_description("Labs >= 55");
/// assert_eq!(rule.kind, RuleKind::TagAverage);
/// assert_eq!(rule.tag_filter.as_deref(), Some("lab"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rule {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: RuleKind,

    /// Target grade on the 0-100 scale.
    pub target: f64,

    /// Tag selecting the rule's scope. Ignored by `GlobalAverage`.
    pub tag_filter: Option<String>,

    /// Free text, used only for reporting.
    pub description: String,
}

impl Rule {
    pub fn global_average(target: f64) -> Self {
        Self {
            kind: RuleKind::GlobalAverage,
            target,
            tag_filter: None,
            description: String::new(),
        }
    }

    pub fn tag_average(tag: impl Into<String>, target: f64) -> Self {
        Self {
            kind: RuleKind::TagAverage,
            target,
            tag_filter: Some(tag.into()),
            description: String::new(),
        }
    }

    pub fn min_grade_per_tag(tag: impl Into<String>, target: f64) -> Self {
        Self {
            kind: RuleKind::MinGradePerTag,
            target,
            tag_filter: Some(tag.into()),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Which solver proposes grades for the ungraded assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Each ungraded item is solved independently against every rule.
    #[default]
    Uniform,

    /// All remaining effort is pushed onto the heaviest ungraded item.
    HeaviestFocus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_builder() {
        let a = Assessment::new("Lab 1", 15.0)
            .with_tag("lab")
            .with_tag("practical")
            .with_grade(72.5);

        assert_eq!(a.name, "Lab 1");
        assert!((a.weight - 15.0).abs() < 1e-10);
        assert!(a.is_graded());
        assert!(a.has_tag("lab"));
        assert!(a.has_tag("practical"));
        assert!(!a.has_tag("exam"));
    }

    #[test]
    fn test_rule_constructors() {
        let g = Rule::global_average(60.0);
        assert_eq!(g.kind, RuleKind::GlobalAverage);
        assert!(g.tag_filter.is_none());

        let m = Rule::min_grade_per_tag("exam", 40.0).with_description("Exams >= 40");
        assert_eq!(m.kind, RuleKind::MinGradePerTag);
        assert_eq!(m.tag_filter.as_deref(), Some("exam"));
        assert_eq!(m.description, "Exams >= 40");
    }

    #[test]
    fn test_rule_kind_is_average() {
        assert!(RuleKind::GlobalAverage.is_average());
        assert!(RuleKind::TagAverage.is_average());
        assert!(!RuleKind::MinGradePerTag.is_average());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Strategy::default(), Strategy::Uniform);
        assert_eq!(RuleKind::default(), RuleKind::GlobalAverage);
        let a = Assessment::default();
        assert!(a.grade.is_none());
        assert!(a.tags.is_empty());
    }
}
