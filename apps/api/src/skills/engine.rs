//! The evaluation pipeline: Dictionary → Extractor → Matcher → Recommendations.
//!
//! `SkillEngine` is immutable after construction and shared through
//! `AppState` as an `Arc`; every call works on caller-owned inputs.

use serde::{Deserialize, Serialize};

use crate::skills::dictionary::SkillDictionary;
use crate::skills::extractor::extract_skills;
use crate::skills::matcher::{match_skills, MatchMode, MatchResult};
use crate::skills::recommendations::{
    generate_recommendations, Recommendation, DEFAULT_MAX_RECOMMENDATIONS,
};
use crate::skills::skill_set::SkillSet;

/// Full result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(flatten)]
    pub result: MatchResult,
    pub recommendations: Vec<Recommendation>,
    pub candidate_skills: SkillSet,
    pub required_skills: SkillSet,
}

#[derive(Debug, Clone)]
pub struct SkillEngine {
    dictionary: SkillDictionary,
    mode: MatchMode,
    max_recommendations: usize,
}

impl Default for SkillEngine {
    fn default() -> Self {
        Self::new(
            SkillDictionary::builtin(),
            MatchMode::default(),
            DEFAULT_MAX_RECOMMENDATIONS,
        )
    }
}

impl SkillEngine {
    pub fn new(dictionary: SkillDictionary, mode: MatchMode, max_recommendations: usize) -> Self {
        Self {
            dictionary,
            mode,
            max_recommendations,
        }
    }

    pub fn dictionary(&self) -> &SkillDictionary {
        &self.dictionary
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn max_recommendations(&self) -> usize {
        self.max_recommendations
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        extract_skills(text, &self.dictionary, self.mode)
    }

    /// Extracts skills from both texts and compares them.
    pub fn evaluate(&self, candidate_text: &str, required_text: &str) -> Evaluation {
        let candidate = self.extract(candidate_text);
        let required = self.extract(required_text);
        self.compare(candidate, required)
    }

    /// Compares already-structured skill lists, skipping extraction.
    pub fn compare(&self, candidate: SkillSet, required: SkillSet) -> Evaluation {
        let result = match_skills(&candidate, &required, self.mode);
        let recommendations =
            generate_recommendations(&result.missing_skills, self.max_recommendations);

        Evaluation {
            result,
            recommendations,
            candidate_skills: candidate,
            required_skills: required,
        }
    }
}
