//! Recommendation Generator: turns the gap list into ranked, human-readable suggestions.

use serde::{Deserialize, Serialize};

use crate::skills::skill_set::SkillSet;

pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 4;

/// How many missing skills the lead recommendation names.
pub const TOP_MISSING_SKILLS: usize = 3;

const COURSES: &str = "Complete online courses to improve skills alignment";
const MOCK_INTERVIEWS: &str = "Practice with mock interviews to boost confidence";
const PROJECTS: &str = "Build projects showcasing the required skills";
const NO_GAPS: &str = "You already have the required skills. Keep them sharp and start applying";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    /// 1-based position in the output.
    pub rank: u32,
}

/// Builds up to `max_items` recommendations from `missing`.
///
/// With gaps, the first entry names the top missing skills and the rest are
/// fixed study suggestions. With no gaps, the first entry is a "no gaps"
/// message, which is returned even for `max_items == 0`.
pub fn generate_recommendations(missing: &SkillSet, max_items: usize) -> Vec<Recommendation> {
    let (texts, limit) = if missing.is_empty() {
        (
            vec![NO_GAPS.to_string(), MOCK_INTERVIEWS.to_string()],
            max_items.max(1),
        )
    } else {
        let top: Vec<&str> = missing.iter().take(TOP_MISSING_SKILLS).collect();
        (
            vec![
                format!("Learn these key skills: {}", top.join(", ")),
                COURSES.to_string(),
                MOCK_INTERVIEWS.to_string(),
                PROJECTS.to_string(),
            ],
            max_items,
        )
    };

    texts
        .into_iter()
        .take(limit)
        .zip(1..)
        .map(|(text, rank)| Recommendation { text, rank })
        .collect()
}
