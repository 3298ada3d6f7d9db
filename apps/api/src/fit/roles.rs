//! Role profiles — the static role → required-skills configuration.
//!
//! Loaded once at start-up from a JSON file (`ROLE_PROFILES_PATH`) or taken
//! from the built-in defaults. Never mutated after load.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::fit::advice::AdviceBook;
use crate::fit::skill::{collect_skills, Skill, SkillSet};

/// A named role and the skills it requires.
#[derive(Debug, Clone, Serialize)]
pub struct RoleProfile {
    pub name: String,
    pub skills: SkillSet,
}

/// Role id → profile. Lookups are exact on the id.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: BTreeMap<String, RoleProfile>,
}

const BUILTIN_ROLES: &[(&str, &[&str])] = &[
    (
        "Analyst",
        &["SQL", "Python", "Excel", "Power BI", "Data Visualization"],
    ),
    (
        "Marketing",
        &["SEO", "Canva", "Market Research", "Creativity", "Social Media"],
    ),
    ("HR", &["Recruitment", "Communication", "Teamwork", "Leadership"]),
    (
        "Sales",
        &["Negotiation", "CRM", "Time Management", "Presentation Skills"],
    ),
];

impl RoleCatalog {
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for (name, skills) in BUILTIN_ROLES {
            catalog.insert(name, skills.iter().copied());
        }
        catalog
    }

    /// Adds (or replaces) a role. Blank skill names are dropped; repeated
    /// skills keep the first spelling.
    pub fn insert<'a>(&mut self, name: &str, skills: impl IntoIterator<Item = &'a str>) {
        let skills = collect_skills(skills.into_iter().filter_map(Skill::canonical));
        self.roles.insert(
            name.to_string(),
            RoleProfile {
                name: name.to_string(),
                skills,
            },
        );
    }

    pub fn get(&self, role_id: &str) -> Option<&RoleProfile> {
        self.roles.get(role_id)
    }

    /// Profiles sorted by role id.
    pub fn iter(&self) -> impl Iterator<Item = &RoleProfile> {
        self.roles.values()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }
}

/// On-disk shape of the role profile file.
#[derive(Debug, Deserialize)]
struct RoleConfigFile {
    roles: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    advice: BTreeMap<String, String>,
}

/// Everything the presentation layer needs besides the evaluator itself.
#[derive(Debug, Clone)]
pub struct RoleConfig {
    pub catalog: RoleCatalog,
    pub advice: AdviceBook,
}

impl RoleConfig {
    pub fn builtin() -> Self {
        Self {
            catalog: RoleCatalog::builtin(),
            advice: AdviceBook::builtin(),
        }
    }

    /// Parses `{"roles": {"<id>": ["skill", ...]}, "advice": {"<skill>": "<tip>"}}`.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: RoleConfigFile =
            serde_json::from_str(raw).context("Role profile file is not valid JSON")?;

        let mut catalog = RoleCatalog::default();
        for (name, skills) in &file.roles {
            let name = name.trim();
            if name.is_empty() {
                bail!("Role profile file contains a role with an empty id");
            }
            if catalog.get(name).is_some() {
                bail!("Role profile file defines role '{name}' more than once");
            }
            catalog.insert(name, skills.iter().map(String::as_str));
        }

        let mut advice = AdviceBook::default();
        for (skill, tip) in &file.advice {
            advice.insert(skill, tip);
        }

        Ok(Self { catalog, advice })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role profiles: {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse role profiles: {}", path.display()))
    }
}
