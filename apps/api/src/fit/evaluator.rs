//! Skill-fit evaluator — compares a free-text skill listing against a role.
//!
//! Pure and stateless: every call builds a fresh `FitReport` from its
//! arguments, with no I/O and no failure modes. Degenerate input (empty text,
//! unknown role, role without skills) yields empty sets and a zero score.

use serde::Serialize;

use crate::fit::roles::RoleCatalog;
use crate::fit::skill::{collect_skills, Skill, SkillSet};

/// Result of one evaluation.
///
/// Every required skill of the role lands in exactly one of `matched` or
/// `missing`; both carry the role's own labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitReport {
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub score: u32, // 0 – 100
}

/// Evaluates `raw_skills_text` against the role `role_id` in `roles`.
/// An unknown role is treated as a role with no required skills.
pub fn evaluate(raw_skills_text: &str, role_id: &str, roles: &RoleCatalog) -> FitReport {
    let candidate = parse_skill_list(raw_skills_text);
    match roles.get(role_id) {
        Some(role) => score_sets(&candidate, &role.skills),
        None => score_sets(&candidate, &SkillSet::new()),
    }
}

/// Splits on commas, drops blank tokens, normalizes and deduplicates.
pub fn parse_skill_list(raw: &str) -> SkillSet {
    collect_skills(raw.split(',').filter_map(Skill::from_user_input))
}

pub fn score_sets(candidate: &SkillSet, target: &SkillSet) -> FitReport {
    let (matched, missing): (SkillSet, SkillSet) = target
        .iter()
        .cloned()
        .partition(|skill| candidate.contains(skill));

    let score = fit_percentage(matched.len(), target.len());

    FitReport {
        matched,
        missing,
        score,
    }
}

/// `round(100 * matched / total)` with ties to even; 0 when `total` is 0.
pub fn fit_percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * matched as f64 / total as f64).round_ties_even() as u32
}
