//! Skill Matcher: compares a candidate skill set against a required skill set.
//!
//! Two skills are equivalent when, case-insensitively, they are equal or one
//! contains the other. This tolerates naming variants ("React" / "ReactJS")
//! and also admits the known false positives ("Java" inside "JavaScript").
//! `MatchMode::WordBoundary` narrows containment to whole-word occurrences.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::skills::skill_set::SkillSet;

/// How a needle must occur inside a haystack to count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring containment anywhere in the text.
    #[default]
    Substring,
    /// Containment flanked by non-alphanumeric characters or text edges.
    WordBoundary,
}

#[derive(Debug, Error)]
#[error("unknown match mode '{0}' (expected 'substring' or 'word_boundary')")]
pub struct UnknownMatchMode(String);

impl FromStr for MatchMode {
    type Err = UnknownMatchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" | "word-boundary" => Ok(MatchMode::WordBoundary),
            other => Err(UnknownMatchMode(other.to_string())),
        }
    }
}

impl MatchMode {
    /// Containment test on already-lowercased inputs.
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchMode::Substring => haystack.contains(needle),
            MatchMode::WordBoundary => contains_whole_word(haystack, needle),
        }
    }

    /// Bidirectional equivalence on already-lowercased skill keys.
    pub fn equivalent(self, a: &str, b: &str) -> bool {
        a == b || self.contains(b, a) || self.contains(a, b)
    }
}

fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    // Step one char at a time so overlapping occurrences are all checked.
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();

        if !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        {
            return true;
        }

        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Outcome of comparing two skill sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Candidate skills equivalent to at least one required skill, in candidate order.
    pub matched_skills: SkillSet,
    /// Required skills with no equivalent candidate skill, in required order.
    pub missing_skills: SkillSet,
    /// 0 – 100
    pub match_percentage: u8,
}

/// Matches `candidate` against `required` under `mode`.
///
/// Never fails: empty inputs give empty sets and a 0% score.
pub fn match_skills(candidate: &SkillSet, required: &SkillSet, mode: MatchMode) -> MatchResult {
    let candidate_keys: Vec<String> = candidate.iter().map(str::to_lowercase).collect();
    let required_keys: Vec<String> = required.iter().map(str::to_lowercase).collect();

    let matched_skills: SkillSet = candidate
        .iter()
        .zip(&candidate_keys)
        .filter(|(_, c)| required_keys.iter().any(|r| mode.equivalent(c, r)))
        .map(|(label, _)| label)
        .collect();

    let missing_skills: SkillSet = required
        .iter()
        .zip(&required_keys)
        .filter(|(_, r)| !candidate_keys.iter().any(|c| mode.equivalent(c, r)))
        .map(|(label, _)| label)
        .collect();

    let match_percentage = compute_percentage(matched_skills.len(), required.len());

    debug!(
        candidate = candidate.len(),
        required = required.len(),
        matched = matched_skills.len(),
        missing = missing_skills.len(),
        match_percentage,
        "skill match computed"
    );

    MatchResult {
        matched_skills,
        missing_skills,
        match_percentage,
    }
}

/// `round(100 * matched / required)`, 0 when nothing is required.
///
/// Several candidate skills can match the same required skill
/// ("Java" and "JavaScript" against "JavaScript"), so the ratio is capped at 100.
fn compute_percentage(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    let pct = (100.0 * matched as f64 / required as f64).round();
    pct.min(100.0) as u8
}
