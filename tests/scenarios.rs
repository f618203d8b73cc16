//! End-to-end scenarios through the public API.

use u_grade::calculator::calculate;
use u_grade::course::{Assessment, CourseConfig, Rule, Strategy};
use u_grade::status::Status;

#[test]
fn single_ungraded_assessment_needs_the_target() {
    let config = CourseConfig::new("A")
        .with_strategy(Strategy::Uniform)
        .with_rule(Rule::global_average(60.0).with_description("Pass"))
        .with_assessment(Assessment::new("Exam", 100.0));

    let result = calculate(&config);

    assert!((result.proposed_grades["Exam"] - 60.0).abs() < 1e-10);
    assert_eq!(result.rule_statuses[0].status, Status::Possible);
    assert_eq!(result.status, Status::Possible);
    assert!(result.message.contains("Pass"));
}

#[test]
fn graded_half_lowers_the_requirement() {
    let config = CourseConfig::new("B")
        .with_rule(Rule::global_average(70.0))
        .with_assessment(Assessment::new("First", 50.0).with_grade(90.0))
        .with_assessment(Assessment::new("Second", 50.0));

    let result = calculate(&config);

    assert_eq!(result.proposed_grades.len(), 1);
    assert!((result.proposed_grades["Second"] - 50.0).abs() < 1e-10);
    assert_eq!(result.status, Status::Possible);
}

#[test]
fn failed_minimum_is_immediately_impossible() {
    let config = CourseConfig::new("C")
        .with_rule(Rule::min_grade_per_tag("exam", 60.0).with_description("Every exam >= 60"))
        .with_assessment(Assessment::new("Midterm", 100.0).with_tag("exam").with_grade(40.0));

    let result = calculate(&config);

    assert_eq!(result.status, Status::Impossible);
    assert!(result.message.contains("Midterm"));
    assert!(result.message.contains("Every exam >= 60"));
    assert!(result.proposed_grades.is_empty());
    assert_eq!(result.rule_statuses[0].status, Status::Impossible);
}

#[test]
fn heaviest_focus_loads_the_heavy_item() {
    let config = CourseConfig::new("D")
        .with_strategy(Strategy::HeaviestFocus)
        .with_rule(Rule::global_average(50.0))
        .with_assessment(Assessment::new("Light", 20.0))
        .with_assessment(Assessment::new("Heavy", 80.0));

    let result = calculate(&config);

    assert!((result.proposed_grades["Heavy"] - 62.5).abs() < 1e-10);
    assert_eq!(result.proposed_grades["Light"], 0.0);
    assert_eq!(result.status, Status::Possible);
}

#[test]
fn strategies_disagree_on_distribution_but_agree_on_feasibility() {
    let base = CourseConfig::new("mixed")
        .with_rule(Rule::global_average(60.0).with_description("Overall"))
        .with_rule(Rule::tag_average("lab", 70.0).with_description("Labs"))
        .with_rule(Rule::min_grade_per_tag("exam", 40.0).with_description("Exam min"))
        .with_assessment(Assessment::new("Lab 1", 10.0).with_tag("lab").with_grade(80.0))
        .with_assessment(Assessment::new("Lab 2", 10.0).with_tag("lab"))
        .with_assessment(Assessment::new("Midterm", 30.0).with_tag("exam").with_grade(55.0))
        .with_assessment(Assessment::new("Final", 50.0).with_tag("exam"));

    let uniform = calculate(&base.clone().with_strategy(Strategy::Uniform));
    let heavy = calculate(&base.clone().with_strategy(Strategy::HeaviestFocus));

    // Uniform, Lab 2: Overall (6000 - 800 - 1650) / 60 = 59.17, Labs 70*20-800 / 10 = 60.
    assert!((uniform.proposed_grades["Lab 2"] - 60.0).abs() < 1e-10);
    // Uniform, Final: Overall 59.17 beats the 40 minimum.
    assert!((uniform.proposed_grades["Final"] - 3550.0 / 60.0).abs() < 1e-9);
    assert_eq!(uniform.status, Status::Possible);

    // Heaviest: Final seeded at 40, Lab 2 takes the lab deficit (600 / 10 = 60),
    // then Overall: 6000 - (800 + 600 + 1650 + 2000) = 950 on Final: 40 + 19 = 59.
    assert!((heavy.proposed_grades["Lab 2"] - 60.0).abs() < 1e-10);
    assert!((heavy.proposed_grades["Final"] - 59.0).abs() < 1e-10);
    assert_eq!(heavy.status, Status::Possible);
    assert_eq!(heavy.limiting_rule_description, "Overall");
}

#[test]
fn everything_graded_and_passing_is_guaranteed() {
    let config = CourseConfig::new("done")
        .with_rule(Rule::global_average(50.0))
        .with_rule(Rule::tag_average("lab", 50.0))
        .with_assessment(Assessment::new("Lab", 40.0).with_tag("lab").with_grade(60.0))
        .with_assessment(Assessment::new("Exam", 60.0).with_grade(70.0));

    let result = calculate(&config);

    assert!(result.proposed_grades.is_empty());
    assert_eq!(result.status, Status::Guaranteed);
    assert!(result
        .rule_statuses
        .iter()
        .all(|s| s.status == Status::Guaranteed));
}

#[test]
fn unreachable_target_is_impossible() {
    let config = CourseConfig::new("late")
        .with_strategy(Strategy::HeaviestFocus)
        .with_rule(Rule::global_average(80.0).with_description("Honours"))
        .with_assessment(Assessment::new("Midterm", 70.0).with_grade(50.0))
        .with_assessment(Assessment::new("Final", 30.0));

    let result = calculate(&config);

    // (8000 - 3500) / 30 = 150
    assert!((result.proposed_grades["Final"] - 150.0).abs() < 1e-9);
    assert_eq!(result.status, Status::Impossible);
    assert!(result.message.contains("Honours"));
    assert_eq!(result.rule_statuses[0].status, Status::Possible);
}

#[test]
fn input_is_not_mutated() {
    let config = CourseConfig::new("pure")
        .with_strategy(Strategy::HeaviestFocus)
        .with_rule(Rule::global_average(65.0))
        .with_assessment(Assessment::new("A", 30.0).with_grade(70.0))
        .with_assessment(Assessment::new("B", 70.0));
    let before = config.clone();

    let first = calculate(&config);
    let second = calculate(&config);

    assert_eq!(config, before);
    assert_eq!(first, second);
}
