use serde::{Deserialize, Serialize};

/// A set of skill labels, deduplicated case-insensitively.
///
/// Keeps first-seen order and casing so output lists are deterministic.
/// Equality ignores order and case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    labels: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a label unless it is blank or already present.
    /// Returns `true` when the set grew.
    pub fn insert(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        let key = label.trim().to_lowercase();
        self.labels.iter().any(|l| l.to_lowercase() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl PartialEq for SkillSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|l| other.contains(l))
    }
}

impl Eq for SkillSet {}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for label in iter {
            set.insert(label.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(labels: Vec<String>) -> Self {
        labels.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_collapses_case_variants() {
        let mut set = SkillSet::new();
        assert!(set.insert("Python"));
        assert!(!set.insert("python"));
        assert!(!set.insert(" PYTHON "));
        assert_eq!(set.labels(), &["Python".to_string()]);
    }

    #[test]
    fn test_blank_labels_are_skipped() {
        let set: SkillSet = ["", "  ", "SQL"].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_equality_ignores_order_and_case() {
        let a: SkillSet = ["Python", "SQL"].into_iter().collect();
        let b: SkillSet = ["sql", "python"].into_iter().collect();
        let c: SkillSet = ["sql"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deserialize_dedups() {
        let set: SkillSet = serde_json::from_str(r#"["React", "react", "Vue"]"#).unwrap();
        assert_eq!(set.labels(), &["React".to_string(), "Vue".to_string()]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["React","Vue"]"#);
    }
}
