//! Skill Dictionary: the universe of recognizable skill labels.
//!
//! Fixed at process start. Either the built-in list or a JSON file of the
//! shape `{ "dictionary": ["Rust", "SQL", ...] }` loaded via configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in dictionary used when no `SKILL_DICTIONARY_PATH` is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "Java",
    "C++",
    "TypeScript",
    "Angular",
    "Vue",
    "Machine Learning",
    "Data Science",
    "DevOps",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Team Management",
    "Agile",
    "Scrum",
    "REST API",
    "GraphQL",
    "HTML",
    "CSS",
    "Redux",
    "Express",
    "PostgreSQL",
    "Firebase",
    "CI/CD",
    "Jest",
    "Testing",
    "System Design",
    "Algorithms",
    "Data Structures",
];

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary entry {position} is blank")]
    EmptyLabel { position: usize },

    #[error("dictionary entry '{label}' duplicates '{existing}'")]
    Duplicate { label: String, existing: String },

    #[error("failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dictionary file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A canonical skill label. Identity is the lowercase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLabel {
    label: String,
    key: String,
}

impl SkillLabel {
    fn new(label: &str) -> Self {
        let label = label.trim().to_string();
        let key = label.to_lowercase();
        Self { label, key }
    }

    /// The canonical casing, e.g. "JavaScript".
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// The lowercase form used for every comparison.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// On-disk shape of a configured dictionary.
#[derive(Debug, Deserialize, Serialize)]
pub struct DictionaryFile {
    pub dictionary: Vec<String>,
}

/// Ordered, duplicate-free set of skill labels.
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    skills: Vec<SkillLabel>,
}

impl SkillDictionary {
    /// Builds a dictionary, rejecting blank labels and labels that collide
    /// case-insensitively with an earlier entry.
    pub fn new<I, S>(labels: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills: Vec<SkillLabel> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (position, raw) in labels.into_iter().enumerate() {
            let skill = SkillLabel::new(raw.as_ref());
            if skill.key.is_empty() {
                return Err(DictionaryError::EmptyLabel { position });
            }
            if let Some(&idx) = seen.get(&skill.key) {
                return Err(DictionaryError::Duplicate {
                    label: skill.label,
                    existing: skills[idx].label.clone(),
                });
            }
            seen.insert(skill.key.clone(), skills.len());
            skills.push(skill);
        }

        Ok(Self { skills })
    }

    /// The built-in product dictionary.
    pub fn builtin() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| SkillLabel::new(s)).collect(),
        }
    }

    /// Loads a dictionary from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DictionaryFile = serde_json::from_str(&raw)?;
        Self::new(file.dictionary)
    }

    pub fn all_skills(&self) -> &[SkillLabel] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}
