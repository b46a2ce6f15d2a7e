//! Skill Extractor: finds which dictionary skills occur in free text.

use tracing::debug;

use crate::skills::dictionary::SkillDictionary;
use crate::skills::matcher::MatchMode;
use crate::skills::skill_set::SkillSet;

/// Returns every dictionary skill contained in `text`, in dictionary order.
///
/// The text is lowercased once and each skill's lowercase form is tested for
/// containment under `mode`. Empty text or an empty dictionary yields an
/// empty set.
pub fn extract_skills(text: &str, dictionary: &SkillDictionary, mode: MatchMode) -> SkillSet {
    let normalized = text.to_lowercase();

    let found: SkillSet = dictionary
        .all_skills()
        .iter()
        .filter(|skill| mode.contains(&normalized, skill.key()))
        .map(|skill| skill.as_str())
        .collect();

    debug!(
        text_len = text.len(),
        dictionary = dictionary.len(),
        found = found.len(),
        "skills extracted"
    );

    found
}
