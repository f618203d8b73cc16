//! Heaviest-focus lazy solver.
//!
//! Puts all remaining effort on the single most valuable ungraded
//! assessment (the "MVP"):
//!
//! 1. Every ungraded item starts at the strictest per-tag minimum that
//!    applies to it (0 if none).
//! 2. Averaging rules are processed tag averages first, then global
//!    averages, each in input order. Proposals accumulate across rules.
//! 3. A rule's shortfall goes entirely onto the MVP when the MVP is in
//!    scope. Otherwise every ungraded participant receives the same bump
//!    of `deficit / participant_weight`.

use super::types::{GradeStrategy, Proposal, NO_LIMITING_RULE};
use crate::course::{Assessment, CourseConfig, Rule, RuleKind};
use crate::rules::{applies, safe_div, scope, EPSILON};
use std::collections::BTreeMap;
use tracing::debug;

/// Concentrates every shortfall on the heaviest ungraded assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaviestFocusSolver;

impl GradeStrategy for HeaviestFocusSolver {
    fn label(&self) -> &str {
        "Heaviest Focus (Lazy)"
    }

    fn solve(&self, config: &CourseConfig) -> Proposal {
        let mut proposed = seed_minimums(config);

        let Some(mvp) = heaviest_ungraded(config) else {
            return Proposal {
                proposed_grades: proposed,
                limiting_rule: NO_LIMITING_RULE.to_string(),
            };
        };
        debug!(mvp = %mvp.name, weight = mvp.weight, "heaviest ungraded assessment");

        let mut limiting_rule = NO_LIMITING_RULE;

        for rule in averaging_rules_in_order(&config.rules) {
            let mut total_weight = 0.0;
            let mut points = 0.0;
            let mut participants: Vec<&Assessment> = Vec::new();

            for a in scope(rule, &config.assessments) {
                total_weight += a.weight;
                let value = match a.grade {
                    Some(grade) => grade,
                    None => proposed.get(&a.name).copied().unwrap_or(0.0),
                };
                points += value * a.weight;
                if !a.is_graded() {
                    participants.push(a);
                }
            }

            if participants.is_empty() {
                continue;
            }

            let deficit = rule.target * total_weight - points;
            if deficit <= EPSILON {
                continue;
            }
            debug!(rule = %rule.description, deficit, "shortfall");
            limiting_rule = rule.description.as_str();

            if participants.iter().any(|a| a.name == mvp.name) {
                *proposed.entry(mvp.name.clone()).or_insert(0.0) +=
                    safe_div(deficit, mvp.weight);
            } else {
                // Same bump for each participant, not split by weight share.
                let participant_weight: f64 = participants.iter().map(|a| a.weight).sum();
                let bump = safe_div(deficit, participant_weight);
                for a in participants {
                    *proposed.entry(a.name.clone()).or_insert(0.0) += bump;
                }
            }
        }

        Proposal {
            proposed_grades: proposed,
            limiting_rule: limiting_rule.to_string(),
        }
    }
}

/// Seeds each ungraded assessment with its strictest applicable minimum.
fn seed_minimums(config: &CourseConfig) -> BTreeMap<String, f64> {
    config
        .ungraded()
        .map(|item| {
            let floor = config
                .rules
                .iter()
                .filter(|r| r.kind == RuleKind::MinGradePerTag && applies(r, item))
                .fold(0.0_f64, |acc, r| acc.max(r.target));
            (item.name.clone(), floor)
        })
        .collect()
}

/// The ungraded assessment with the largest weight; the first one on ties.
fn heaviest_ungraded(config: &CourseConfig) -> Option<&Assessment> {
    config.ungraded().fold(None, |best: Option<&Assessment>, a| match best {
        Some(b) if b.weight >= a.weight => Some(b),
        _ => Some(a),
    })
}

/// Averaging rules with every tag average ahead of every global average.
fn averaging_rules_in_order(rules: &[Rule]) -> Vec<&Rule> {
    let mut ordered: Vec<&Rule> = rules.iter().filter(|r| r.kind.is_average()).collect();
    // Stable: input order is kept within each kind.
    ordered.sort_by_key(|r| match r.kind {
        RuleKind::TagAverage => 0,
        RuleKind::GlobalAverage => 1,
        RuleKind::MinGradePerTag => 2,
    });
    ordered
}
