//! Advice book — display tips for skills a candidate is missing.
//!
//! Purely presentational: the evaluator never reads it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fit::evaluator::FitReport;
use crate::fit::skill::{Skill, SkillSet};

/// Below this score the response carries a general "keep learning" hint.
pub const PRO_TIP_THRESHOLD: u32 = 70;

const PRO_TIP: &str = "Consider learning the missing skills to boost your profile!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillAdvice {
    pub skill: Skill,
    pub tip: String,
}

#[derive(Debug, Clone, Default)]
pub struct AdviceBook {
    tips: BTreeMap<Skill, String>,
}

const BUILTIN_TIPS: &[(&str, &str)] = &[
    ("SQL", "Practice joins and window functions on a public dataset."),
    ("Python", "Automate a small reporting task with pandas."),
    ("Excel", "Get comfortable with pivot tables and XLOOKUP."),
    ("Power BI", "Publish a dashboard built from a CSV you care about."),
    ("Data Visualization", "Recreate a chart from the news and critique it."),
    ("SEO", "Audit a personal site with a free SEO checker."),
    ("Canva", "Design a one-page campaign brief."),
    ("Market Research", "Run a five-question survey and summarize the results."),
    ("Creativity", "Keep a swipe file of campaigns you admire."),
    ("Social Media", "Grow a niche account and track its engagement."),
    ("Recruitment", "Shadow an interview loop or screen mock candidates."),
    ("Communication", "Present a short talk and ask for feedback."),
    ("Teamwork", "Contribute to a group project with shared goals."),
    ("Leadership", "Volunteer to coordinate a club or event."),
    ("Negotiation", "Role-play salary and vendor negotiations."),
    ("CRM", "Try the free tier of a CRM and model a sales pipeline."),
    ("Time Management", "Time-box a week of work and review the estimates."),
    ("Presentation Skills", "Record a three-minute pitch and rewatch it."),
];

impl AdviceBook {
    pub fn builtin() -> Self {
        let mut book = Self::default();
        for (skill, tip) in BUILTIN_TIPS {
            book.insert(skill, tip);
        }
        book
    }

    /// Adds a tip. Blank skill names are ignored.
    pub fn insert(&mut self, skill: &str, tip: &str) {
        if let Some(skill) = Skill::canonical(skill) {
            self.tips.insert(skill, tip.trim().to_string());
        }
    }

    pub fn tip_for(&self, skill: &Skill) -> Option<&str> {
        self.tips.get(skill).map(String::as_str)
    }

    /// Tips for every missing skill that has one, in set order.
    pub fn advice_for(&self, missing: &SkillSet) -> Vec<SkillAdvice> {
        missing
            .iter()
            .filter_map(|skill| {
                self.tip_for(skill).map(|tip| SkillAdvice {
                    skill: skill.clone(),
                    tip: tip.to_string(),
                })
            })
            .collect()
    }
}

/// General hint shown when the score is low and something is still missing.
pub fn pro_tip(report: &FitReport) -> Option<String> {
    if report.score < PRO_TIP_THRESHOLD && !report.missing.is_empty() {
        Some(PRO_TIP.to_string())
    } else {
        None
    }
}
