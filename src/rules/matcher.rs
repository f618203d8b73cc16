//! Rule-to-assessment matching.

use crate::course::{Assessment, Rule, RuleKind};

/// Returns `true` if `rule` governs `assessment`.
///
/// - `GlobalAverage` governs every assessment.
/// - `TagAverage` governs the assessments carrying its tag, or every
///   assessment when it has no tag.
/// - `MinGradePerTag` governs the assessments carrying its tag, and
///   nothing when it has no tag.
pub fn applies(rule: &Rule, assessment: &Assessment) -> bool {
    match (rule.kind, rule.tag_filter.as_deref()) {
        (RuleKind::GlobalAverage, _) => true,
        (RuleKind::TagAverage, None) => true,
        (RuleKind::MinGradePerTag, None) => false,
        (RuleKind::TagAverage | RuleKind::MinGradePerTag, Some(tag)) => assessment.has_tag(tag),
    }
}

/// Iterates over the assessments governed by `rule`, in input order.
pub fn scope<'a>(
    rule: &'a Rule,
    assessments: &'a [Assessment],
) -> impl Iterator<Item = &'a Assessment> + 'a {
    assessments.iter().filter(move |a| applies(rule, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged() -> Assessment {
        Assessment::new("Lab", 10.0).with_tag("lab")
    }

    fn untagged() -> Assessment {
        Assessment::new("Essay", 10.0)
    }

    #[test]
    fn test_global_applies_everywhere() {
        let rule = Rule::global_average(50.0);
        assert!(applies(&rule, &tagged()));
        assert!(applies(&rule, &untagged()));
    }

    #[test]
    fn test_global_ignores_tag_filter() {
        let mut rule = Rule::global_average(50.0);
        rule.tag_filter = Some("exam".into());
        assert!(applies(&rule, &untagged()));
    }

    #[test]
    fn test_tag_rules_match_tag() {
        for rule in [
            Rule::tag_average("lab", 50.0),
            Rule::min_grade_per_tag("lab", 50.0),
        ] {
            assert!(applies(&rule, &tagged()));
            assert!(!applies(&rule, &untagged()));
        }
    }

    #[test]
    fn test_untagged_rules() {
        let mut avg = Rule::tag_average("x", 50.0);
        avg.tag_filter = None;
        assert!(applies(&avg, &untagged()));

        let mut min = Rule::min_grade_per_tag("x", 50.0);
        min.tag_filter = None;
        assert!(!applies(&min, &tagged()));
    }

    #[test]
    fn test_scope_preserves_order() {
        let items = vec![tagged(), untagged(), Assessment::new("Lab 2", 5.0).with_tag("lab")];
        let rule = Rule::tag_average("lab", 50.0);
        let names: Vec<&str> = scope(&rule, &items).map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Lab", "Lab 2"]);
    }
}
