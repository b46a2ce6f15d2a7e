//! Market reference data and skill-gap analysis against a target role.
//!
//! Demand figures are static reference data; they are served as-is and never
//! feed the score. The gap itself is computed by the shared skill engine.

use serde::Serialize;

use crate::skills::engine::SkillEngine;
use crate::skills::recommendations::Recommendation;
use crate::skills::skill_set::SkillSet;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketSkill {
    pub skill: &'static str,
    pub demand: &'static str,
    pub growth: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SoftSkill {
    pub skill: &'static str,
    pub importance: &'static str,
}

pub const TOP_SKILLS_GLOBAL: &[MarketSkill] = &[
    MarketSkill {
        skill: "AI/Machine Learning",
        demand: "critical",
        growth: "65%",
    },
    MarketSkill {
        skill: "Data Analytics & Big Data",
        demand: "critical",
        growth: "58%",
    },
    MarketSkill {
        skill: "Cloud Computing (AWS/Azure/GCP)",
        demand: "critical",
        growth: "45%",
    },
    MarketSkill {
        skill: "Cybersecurity",
        demand: "critical",
        growth: "40%",
    },
    MarketSkill {
        skill: "Python",
        demand: "very_high",
        growth: "35%",
    },
    MarketSkill {
        skill: "DevOps & CI/CD",
        demand: "very_high",
        growth: "32%",
    },
    MarketSkill {
        skill: "JavaScript/TypeScript",
        demand: "very_high",
        growth: "25%",
    },
    MarketSkill {
        skill: "SQL & Database Management",
        demand: "high",
        growth: "20%",
    },
    MarketSkill {
        skill: "Kubernetes & Containerization",
        demand: "high",
        growth: "38%",
    },
    MarketSkill {
        skill: "API Development",
        demand: "high",
        growth: "22%",
    },
];

pub const TOP_SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill {
        skill: "Creative Thinking",
        importance: "critical",
    },
    SoftSkill {
        skill: "Analytical Thinking",
        importance: "critical",
    },
    SoftSkill {
        skill: "Resilience & Adaptability",
        importance: "very_high",
    },
    SoftSkill {
        skill: "Leadership & Mentoring",
        importance: "very_high",
    },
    SoftSkill {
        skill: "Communication",
        importance: "very_high",
    },
    SoftSkill {
        skill: "Problem Solving",
        importance: "high",
    },
    SoftSkill {
        skill: "Collaboration",
        importance: "high",
    },
    SoftSkill {
        skill: "Time Management",
        importance: "high",
    },
];

pub const KEY_INSIGHT: &str = "39-40% of core job skills will change by 2030";

/// Role key → required skills. The first key contained in the target role wins.
const ROLE_SKILLS: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &["python", "javascript", "sql", "git", "api development", "cloud computing"],
    ),
    (
        "data scientist",
        &["python", "sql", "machine learning", "data analytics", "statistics", "tensorflow"],
    ),
    (
        "ml engineer",
        &["python", "tensorflow", "pytorch", "mlops", "cloud computing", "docker"],
    ),
    (
        "devops engineer",
        &["kubernetes", "docker", "ci/cd", "aws", "terraform", "linux"],
    ),
    (
        "cybersecurity",
        &["security", "networking", "linux", "python", "compliance", "incident response"],
    ),
    (
        "cloud architect",
        &["aws", "azure", "gcp", "kubernetes", "networking", "security"],
    ),
    (
        "full stack",
        &["javascript", "react", "node.js", "python", "sql", "api development"],
    ),
];

/// Market-demand skills required when no role key matches.
const FALLBACK_SKILL_COUNT: usize = 6;
const PRIORITY_SKILL_COUNT: usize = 3;
const MARKET_DEMAND_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapReport {
    pub target_role: String,
    pub skills_matched: SkillSet,
    pub skills_missing: SkillSet,
    pub match_percent: u8,
    pub priority_skills: Vec<String>,
    pub market_demand_skills: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Required skills for `target_role`, falling back to the top market-demand skills.
pub fn required_skills_for_role(target_role: &str) -> SkillSet {
    let target = target_role.to_lowercase();

    ROLE_SKILLS
        .iter()
        .find(|(role, _)| target.contains(role))
        .map(|(_, skills)| skills.iter().collect::<SkillSet>())
        .unwrap_or_else(|| {
            TOP_SKILLS_GLOBAL
                .iter()
                .take(FALLBACK_SKILL_COUNT)
                .map(|s| s.skill.to_lowercase())
                .collect()
        })
}

/// Compares `current_skills` with what `target_role` requires.
pub fn analyze_skill_gap(
    current_skills: SkillSet,
    target_role: &str,
    engine: &SkillEngine,
) -> SkillGapReport {
    let required = required_skills_for_role(target_role);
    let evaluation = engine.compare(current_skills, required);

    let priority_skills = evaluation
        .result
        .missing_skills
        .iter()
        .take(PRIORITY_SKILL_COUNT)
        .map(str::to_string)
        .collect();

    SkillGapReport {
        target_role: target_role.to_string(),
        skills_matched: evaluation.result.matched_skills,
        skills_missing: evaluation.result.missing_skills,
        match_percent: evaluation.result.match_percentage,
        priority_skills,
        market_demand_skills: TOP_SKILLS_GLOBAL
            .iter()
            .take(MARKET_DEMAND_COUNT)
            .map(|s| s.skill.to_string())
            .collect(),
        recommendations: evaluation.recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(labels: &[&str]) -> SkillSet {
        labels.iter().collect()
    }

    #[test]
    fn test_role_lookup_is_case_insensitive_containment() {
        let required = required_skills_for_role("Senior DevOps Engineer II");
        assert!(required.contains("terraform"));
        assert_eq!(required.len(), 6);
    }

    #[test]
    fn test_unknown_role_falls_back_to_market_skills() {
        let required = required_skills_for_role("Underwater Basket Weaver");
        assert_eq!(required.len(), FALLBACK_SKILL_COUNT);
        assert_eq!(required.labels()[0], "ai/machine learning");
        assert!(required.contains("devops & ci/cd"));
    }

    #[test]
    fn test_fallback_gap_report_uses_lowercase_like_role_tables() {
        let engine = SkillEngine::default();
        let report = analyze_skill_gap(skills(&["Python"]), "Astronaut", &engine);
        assert_eq!(report.skills_matched.labels(), &["Python"]);
        assert_eq!(report.skills_missing.labels()[0], "ai/machine learning");
        assert!(report
            .skills_missing
            .iter()
            .all(|s| s == s.to_lowercase()));
    }

    #[test]
    fn test_gap_report_for_data_scientist() {
        let engine = SkillEngine::default();
        let report = analyze_skill_gap(
            skills(&["Python", "SQL", "Excel"]),
            "Data Scientist",
            &engine,
        );

        assert_eq!(report.skills_matched.labels(), &["Python", "SQL"]);
        assert_eq!(
            report.skills_missing.labels(),
            &["machine learning", "data analytics", "statistics", "tensorflow"]
        );
        // 2 of 6
        assert_eq!(report.match_percent, 33);
        assert_eq!(
            report.priority_skills,
            vec!["machine learning", "data analytics", "statistics"]
        );
        assert_eq!(report.market_demand_skills.len(), MARKET_DEMAND_COUNT);
        assert!(report.recommendations[0].text.contains("machine learning"));
    }

    #[test]
    fn test_gap_report_is_deterministic() {
        let engine = SkillEngine::default();
        let first = analyze_skill_gap(skills(&["docker"]), "ML Engineer", &engine);
        let second = analyze_skill_gap(skills(&["docker"]), "ML Engineer", &engine);
        assert_eq!(first.match_percent, second.match_percent);
        assert_eq!(first.skills_missing, second.skills_missing);
    }

    #[test]
    fn test_full_coverage_has_no_gaps() {
        let engine = SkillEngine::default();
        let report = analyze_skill_gap(
            skills(&["AWS", "Azure", "GCP", "Kubernetes", "Networking", "Security"]),
            "cloud architect",
            &engine,
        );
        assert_eq!(report.match_percent, 100);
        assert!(report.priority_skills.is_empty());
    }

    #[test]
    fn test_empty_skills_scores_zero() {
        let engine = SkillEngine::default();
        let report = analyze_skill_gap(SkillSet::new(), "full stack", &engine);
        assert_eq!(report.match_percent, 0);
        assert_eq!(report.skills_missing.len(), 6);
    }
}
