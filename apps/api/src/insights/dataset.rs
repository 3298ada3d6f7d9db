//! Skill frequency dataset — how often each skill shows up in job ads,
//! resumes and hires.
//!
//! Read once from CSV (`Skill,Category,Job Ads,Resumes,Hires`) and queried
//! read-only afterwards.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fit::skill::Skill;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(rename(deserialize = "Skill"))]
    pub skill: String,
    #[serde(rename(deserialize = "Category"))]
    pub category: String,
    #[serde(rename(deserialize = "Job Ads"))]
    pub job_ads: u32,
    #[serde(rename(deserialize = "Resumes"))]
    pub resumes: u32,
    #[serde(rename(deserialize = "Hires"))]
    pub hires: u32,
}

/// Share of the strong-hire skill pool covered by a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HireOverlap {
    /// Number of skills hired above the mean rate.
    pub pool_size: usize,
    /// Pool skills present in the selection, in dataset order.
    pub matched: Vec<String>,
    pub matched_count: usize,
    pub score: u32, // 0 – 100, truncated
}

#[derive(Debug, Clone, Default)]
pub struct SkillDataset {
    records: Vec<SkillRecord>,
}

impl SkillDataset {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<SkillRecord>().enumerate() {
            // +2: one for the header, one for 1-based numbering
            let record = row.with_context(|| format!("Invalid skill record on line {}", index + 2))?;
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open skills dataset: {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("Failed to parse skills dataset: {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect()
    }

    /// Records in the given categories (all when `None`), most advertised
    /// first, capped at `limit`. Ties keep dataset order.
    pub fn top_skills(&self, categories: Option<&[String]>, limit: usize) -> Vec<SkillRecord> {
        let mut selected: Vec<SkillRecord> = self
            .records
            .iter()
            .filter(|r| match categories {
                Some(wanted) => wanted.iter().any(|c| c.eq_ignore_ascii_case(&r.category)),
                None => true,
            })
            .cloned()
            .collect();

        selected.sort_by(|a, b| b.job_ads.cmp(&a.job_ads));
        selected.truncate(limit);
        selected
    }

    /// Counts how many of `selected` are in the strong-hire pool (skills whose
    /// hires exceed the dataset mean). Score is `floor(100 * matched / pool)`.
    pub fn hire_overlap(&self, selected: &[String]) -> HireOverlap {
        let pool = self.strong_hire_pool();
        let wanted: HashSet<Skill> = selected
            .iter()
            .filter_map(|s| Skill::canonical(s))
            .collect();

        let matched: Vec<String> = pool
            .iter()
            .filter(|r| Skill::canonical(&r.skill).is_some_and(|skill| wanted.contains(&skill)))
            .map(|r| r.skill.clone())
            .collect();

        let score = if pool.is_empty() {
            0
        } else {
            (100 * matched.len() / pool.len()) as u32
        };

        HireOverlap {
            pool_size: pool.len(),
            matched_count: matched.len(),
            matched,
            score,
        }
    }

    fn strong_hire_pool(&self) -> Vec<&SkillRecord> {
        if self.records.is_empty() {
            return vec![];
        }
        let total: u64 = self.records.iter().map(|r| u64::from(r.hires)).sum();
        let mean = total as f64 / self.records.len() as f64;
        self.records
            .iter()
            .filter(|r| f64::from(r.hires) > mean)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Skill,Category,Job Ads,Resumes,Hires
Python,Technical,120,60,45
SQL,Technical,150,55,50
Excel,Technical,90,110,20
Communication,Soft,80,140,30
Leadership,Soft,40,70,10
SEO,Marketing,60,30,15
";

    fn sample() -> SkillDataset {
        SkillDataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }

    fn names(records: &[SkillRecord]) -> Vec<&str> {
        records.iter().map(|r| r.skill.as_str()).collect()
    }

    #[test]
    fn test_parses_original_headers() {
        let dataset = sample();
        assert_eq!(dataset.len(), 6);
        let top = dataset.top_skills(None, 1);
        let sql = &top[0];
        assert_eq!(sql.skill, "SQL");
        assert_eq!(sql.job_ads, 150);
        assert_eq!(sql.resumes, 55);
        assert_eq!(sql.hires, 50);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(sample().categories(), vec!["Technical", "Soft", "Marketing"]);
    }

    #[test]
    fn test_top_skills_sorted_by_job_ads() {
        let top = sample().top_skills(None, 3);
        assert_eq!(names(&top), vec!["SQL", "Python", "Excel"]);
    }

    #[test]
    fn test_top_skills_category_filter() {
        let filter = vec!["soft".to_string(), "Marketing".to_string()];
        let top = sample().top_skills(Some(&filter), 15);
        assert_eq!(names(&top), vec!["Communication", "SEO", "Leadership"]);
    }

    #[test]
    fn test_top_skills_ties_keep_dataset_order() {
        let csv = "Skill,Category,Job Ads,Resumes,Hires\nA,X,5,0,0\nB,X,5,0,0\nC,X,9,0,0\n";
        let dataset = SkillDataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(names(&dataset.top_skills(None, 15)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_hire_overlap_uses_mean_threshold() {
        // mean hires = 170 / 6 ≈ 28.3 → pool = Python, SQL, Communication
        let overlap = sample().hire_overlap(&["sql".to_string(), "Excel".to_string()]);
        assert_eq!(overlap.pool_size, 3);
        assert_eq!(overlap.matched, vec!["SQL"]);
        assert_eq!(overlap.matched_count, 1);
        assert_eq!(overlap.score, 33);
    }

    #[test]
    fn test_hire_overlap_counts_duplicates_once() {
        let selected = vec!["Python".to_string(), " python ".to_string()];
        let overlap = sample().hire_overlap(&selected);
        assert_eq!(overlap.matched_count, 1);
    }

    #[test]
    fn test_hire_overlap_full_pool() {
        let selected = vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Communication".to_string(),
        ];
        assert_eq!(sample().hire_overlap(&selected).score, 100);
    }

    #[test]
    fn test_hire_overlap_empty_selection() {
        let overlap = sample().hire_overlap(&[]);
        assert_eq!(overlap.score, 0);
        assert!(overlap.matched.is_empty());
    }

    #[test]
    fn test_hire_overlap_uniform_hires_has_empty_pool() {
        let csv = "Skill,Category,Job Ads,Resumes,Hires\nA,X,1,1,7\nB,X,1,1,7\n";
        let dataset = SkillDataset::from_reader(csv.as_bytes()).unwrap();
        let overlap = dataset.hire_overlap(&["A".to_string()]);
        assert_eq!(overlap.pool_size, 0);
        assert_eq!(overlap.score, 0);
    }

    #[test]
    fn test_hire_overlap_on_empty_dataset() {
        let overlap = SkillDataset::default().hire_overlap(&["A".to_string()]);
        assert_eq!(overlap.score, 0);
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let csv = "Skill,Category,Job Ads,Resumes,Hires\nA,X,1,1,1\nB,X,many,1,1\n";
        let err = SkillDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"), "got {err}");
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(SkillDataset::load(file.path()).unwrap().len(), 6);
    }
}
