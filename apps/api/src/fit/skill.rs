//! Skill labels and their normalization.
//!
//! A `Skill` carries two strings: a comparison key (whitespace-collapsed,
//! lowercased) and a display label. Equality, ordering and hashing use the
//! key only, so `"sql"`, `" SQL "` and `"Sql"` are the same skill.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// Ordered set of skills. Iteration order follows the comparison key.
pub type SkillSet = BTreeSet<Skill>;

#[derive(Debug, Clone)]
pub struct Skill {
    key: String,
    label: String,
}

impl Skill {
    /// Builds a skill from a user-typed token. The label is title-cased per
    /// word (`"market research"` → `"Market Research"`).
    /// Returns `None` for blank input.
    pub fn from_user_input(raw: &str) -> Option<Self> {
        let collapsed = collapse_whitespace(raw);
        if collapsed.is_empty() {
            return None;
        }
        Some(Self {
            key: collapsed.to_lowercase(),
            label: title_case(&collapsed),
        })
    }

    /// Builds a skill from configured text, keeping its casing as the label
    /// (`"Power BI"` stays `"Power BI"`). Returns `None` for blank input.
    pub fn canonical(raw: &str) -> Option<Self> {
        let collapsed = collapse_whitespace(raw);
        if collapsed.is_empty() {
            return None;
        }
        Some(Self {
            key: collapsed.to_lowercase(),
            label: collapsed,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Skill {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Skill {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

impl Serialize for Skill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Collects skills into a set, keeping the label of the first occurrence
/// when several inputs share a key.
pub fn collect_skills(skills: impl IntoIterator<Item = Skill>) -> SkillSet {
    let mut set = SkillSet::new();
    for skill in skills {
        set.insert(skill);
    }
    set
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-cases the first character of every whitespace-separated word and
/// lower-cases the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_is_title_cased() {
        let skill = Skill::from_user_input("  market   research ").unwrap();
        assert_eq!(skill.label(), "Market Research");
        assert_eq!(skill.key(), "market research");
    }

    #[test]
    fn test_canonical_keeps_configured_casing() {
        let skill = Skill::canonical(" Power  BI").unwrap();
        assert_eq!(skill.label(), "Power BI");
        assert_eq!(skill.key(), "power bi");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(Skill::from_user_input("").is_none());
        assert!(Skill::from_user_input("   \t ").is_none());
        assert!(Skill::canonical(" ").is_none());
    }

    #[test]
    fn test_equality_ignores_label() {
        let typed = Skill::from_user_input("sql").unwrap();
        let configured = Skill::canonical("SQL").unwrap();
        assert_eq!(typed.label(), "Sql");
        assert_eq!(typed, configured);
    }

    #[test]
    fn test_set_deduplicates_by_key() {
        let set: SkillSet = ["Python", "python", " PYTHON "]
            .iter()
            .filter_map(|s| Skill::from_user_input(s))
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_collect_skills_keeps_first_label() {
        let set = collect_skills(
            ["Rust", " rust ", "RUST"]
                .iter()
                .filter_map(|s| Skill::canonical(s)),
        );
        let labels: Vec<&str> = set.iter().map(Skill::label).collect();
        assert_eq!(labels, vec!["Rust"]);
    }

    #[test]
    fn test_title_case_handles_mixed_input() {
        assert_eq!(title_case("dATA visualization"), "Data Visualization");
        assert_eq!(title_case("c++"), "C++");
    }

    #[test]
    fn test_serializes_as_label() {
        let skill = Skill::canonical("Excel").unwrap();
        assert_eq!(serde_json::to_string(&skill).unwrap(), r#""Excel""#);
    }
}
