//! Plain-text report of a calculation.
//!
//! Presentational only: lists the active rules, a table of assessments
//! with actual or estimated grades, the status of every rule, and the
//! overall verdict.

use crate::calculator::CalculationResult;
use crate::course::{CourseConfig, RuleKind};
use crate::status::RuleStatus;
use std::fmt;

const NAME_WIDTH: usize = 35;
const WEIGHT_WIDTH: usize = 8;
const GRADE_WIDTH: usize = 14;

/// Human-facing report for a `result` computed from `config`.
///
/// ```
/// use u_grade::calculator::calculate;
/// use u_grade::course::{Assessment, CourseConfig, Rule};
/// use u_grade::report::Report;
///
/// let config = CourseConfig::new("Biology")
///     .with_rule(Rule::global_average(60.0).with_description("Pass"))
///     .with_assessment(Assessment::new("Exam", 100.0));
/// let result = calculate(&config);
/// let report = Report::new(&config, &result).to_string();
///
/// assert!(report.contains("COURSE: Biology"));
/// assert!(report.contains("60.0 (est)"));
/// ```
pub struct Report<'a> {
    config: &'a CourseConfig,
    result: &'a CalculationResult,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a CourseConfig, result: &'a CalculationResult) -> Self {
        Self { config, result }
    }
}

/// Renders the [`Report`] of `result` computed from `config`.
pub fn render(config: &CourseConfig, result: &CalculationResult) -> String {
    Report::new(config, result).to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.config, self.result)
    }
}

fn write_report(
    out: &mut fmt::Formatter<'_>,
    config: &CourseConfig,
    result: &CalculationResult,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "  COURSE: {}", config.name)?;
    writeln!(out, "  Active rules:")?;
    for rule in &config.rules {
        writeln!(out, "   - {} (target: {})", rule.description, rule.target)?;
    }
    writeln!(out)?;

    let separator = format!(
        "  +{}+",
        "-".repeat(NAME_WIDTH + WEIGHT_WIDTH + GRADE_WIDTH + 8)
    );
    writeln!(out, "{separator}")?;
    write_row(out, "Assessment [tags]", "Weight", "Grade")?;
    writeln!(out, "{separator}")?;

    for a in &config.assessments {
        let name = if a.tags.is_empty() {
            a.name.clone()
        } else {
            format!("{} [{}]", a.name, a.tags.join(","))
        };
        let grade = match a.grade {
            Some(g) => format!("{g:.1}"),
            None => {
                let proposed = result.proposed_grades.get(&a.name).copied().unwrap_or(0.0);
                format!("{proposed:.1} (est)")
            }
        };
        write_row(out, &name, &format!("{:.1}", a.weight), &grade)?;
    }
    writeln!(out, "{separator}")?;

    if result.global_rule_status().is_some() {
        let score = result.current_global_score;
        write_row(out, "GLOBAL SCORE", "", &format!("{score:.1}"))?;
        writeln!(out, "{separator}")?;
    }

    writeln!(out)?;
    writeln!(out, "  RULE STATUS:")?;
    for status in &result.rule_statuses {
        writeln!(out, "   {}", rule_status_line(status))?;
    }

    writeln!(out)?;
    writeln!(out, "  RESULT: {}", result.status)?;
    writeln!(out, "  {}", result.message)?;
    Ok(())
}

fn write_row(out: &mut fmt::Formatter<'_>, name: &str, weight: &str, grade: &str) -> fmt::Result {
    writeln!(
        out,
        "  | {:<nw$} | {:>ww$} | {:>gw$} |",
        name,
        weight,
        grade,
        nw = NAME_WIDTH,
        ww = WEIGHT_WIDTH,
        gw = GRADE_WIDTH
    )
}

fn rule_status_line(status: &RuleStatus) -> String {
    let tag = status.tag_filter.as_deref().unwrap_or("");
    match status.kind {
        RuleKind::GlobalAverage => format!(
            "Global average: {} ({:.1}/{})",
            status.status, status.current_score, status.target
        ),
        RuleKind::TagAverage => format!(
            "Average [{tag}]: {} ({:.1}/{})",
            status.status, status.current_score, status.target
        ),
        RuleKind::MinGradePerTag => {
            format!("Minimum [{tag}]: {} (min: {})", status.status, status.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::course::{Assessment, Rule};

    fn course() -> CourseConfig {
        CourseConfig::new("Statistics")
            .with_rule(Rule::global_average(60.0).with_description("Overall >= 60"))
            .with_rule(Rule::tag_average("lab", 50.0).with_description("Labs >= 50"))
            .with_rule(Rule::min_grade_per_tag("exam", 40.0).with_description("Exams >= 40"))
            .with_assessment(Assessment::new("Lab 1", 20.0).with_tag("lab").with_grade(70.0))
            .with_assessment(Assessment::new("Final", 80.0).with_tag("exam"))
    }

    #[test]
    fn test_report_sections() {
        let config = course();
        let report = render(&config, &calculate(&config));

        assert!(report.contains("COURSE: Statistics"));
        assert!(report.contains("- Overall >= 60 (target: 60)"));
        assert!(report.contains("Lab 1 [lab]"));
        assert!(report.contains("70.0"));
        assert!(report.contains("(est)"));
        assert!(report.contains("GLOBAL SCORE"));
        assert!(report.contains("Global average: possible (14.0/60)"));
        assert!(report.contains("Average [lab]: guaranteed (70.0/50)"));
        assert!(report.contains("Minimum [exam]: possible (min: 40)"));
        assert!(report.contains("RESULT: possible"));
    }

    #[test]
    fn test_report_without_global_rule() {
        let config = CourseConfig::new("c")
            .with_rule(Rule::tag_average("lab", 50.0))
            .with_assessment(Assessment::new("Lab", 10.0).with_tag("lab"));
        let report = render(&config, &calculate(&config));
        assert!(!report.contains("GLOBAL SCORE"));
    }

    #[test]
    fn test_display_matches_render() {
        let config = course();
        let result = calculate(&config);
        let report = Report::new(&config, &result);
        assert_eq!(format!("{report}"), render(&config, &result));
        assert!(report.to_string().contains("GLOBAL SCORE"));
        assert!(report.to_string().contains("14.0"));
    }

    #[test]
    fn test_rows_are_aligned() {
        let config = course();
        let report = render(&config, &calculate(&config));
        let widths: Vec<usize> = report
            .lines()
            .filter(|l| l.starts_with("  |") || l.starts_with("  +"))
            .map(|l| l.chars().count())
            .collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}
