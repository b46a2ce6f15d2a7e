//! Job board: listing filter plus a per-listing skill match.
//!
//! Each listing's match percentage comes from the shared skill matcher, with
//! the user's skills as candidate and the listing's skills as required.

use serde::{Deserialize, Serialize};

use crate::skills::matcher::{match_skills, MatchMode, MatchResult};
use crate::skills::skill_set::SkillSet;

/// Location value meaning "any location".
pub const ANY_LOCATION: &str = "Nationwide";
/// Job type value meaning "any type".
pub const ANY_JOB_TYPE: &str = "All Types";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String,
    pub posted: String,
    pub skills: Vec<String>,
    pub description: String,
    pub urgent: bool,
}

/// Search filters. Every field is optional; an empty query matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    #[serde(default)]
    pub query: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    /// The user's skills, scored against each listing.
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    #[serde(flatten)]
    pub listing: JobListing,
    #[serde(flatten)]
    pub result: MatchResult,
}

#[derive(Debug, Clone)]
pub struct JobBoard {
    listings: Vec<JobListing>,
}

impl JobBoard {
    pub fn new(listings: Vec<JobListing>) -> Self {
        Self { listings }
    }

    /// The board shipped with the product.
    pub fn seeded() -> Self {
        Self::new(seed_listings())
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn get(&self, id: u32) -> Option<&JobListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Filters listings by `query` and scores each survivor, keeping board order.
    pub fn search(&self, query: &JobQuery, mode: MatchMode) -> Vec<JobMatch> {
        let candidate: SkillSet = query.skills.iter().collect();

        self.listings
            .iter()
            .filter(|listing| matches_filters(listing, query))
            .map(|listing| {
                let required: SkillSet = listing.skills.iter().collect();
                JobMatch {
                    listing: listing.clone(),
                    result: match_skills(&candidate, &required, mode),
                }
            })
            .collect()
    }
}

fn matches_filters(listing: &JobListing, query: &JobQuery) -> bool {
    let needle = query.query.trim().to_lowercase();
    let matches_search = listing.title.to_lowercase().contains(&needle)
        || listing.company.to_lowercase().contains(&needle)
        || listing
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(&needle));

    let matches_location = match query.location.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(loc) if loc.eq_ignore_ascii_case(ANY_LOCATION) => true,
        Some(loc) => listing.location.eq_ignore_ascii_case(loc),
    };

    let matches_type = match query.job_type.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(t) if t.eq_ignore_ascii_case(ANY_JOB_TYPE) => true,
        Some(t) => listing.job_type.label().eq_ignore_ascii_case(t),
    };

    matches_search && matches_location && matches_type
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    job_type: JobType,
    salary: &str,
    posted: &str,
    skills: &[&str],
    description: &str,
    urgent: bool,
) -> JobListing {
    JobListing {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type,
        salary: salary.to_string(),
        posted: posted.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        urgent,
    }
}

fn seed_listings() -> Vec<JobListing> {
    vec![
        listing(
            1,
            "Python Tutor",
            "Coding Academy",
            "Remote",
            JobType::PartTime,
            "₹20,000 - ₹30,000",
            "2 days ago",
            &["Python", "Teaching"],
            "Teach Python programming online to students...",
            false,
        ),
        listing(
            2,
            "Full Stack Engineer",
            "Tech Startup Inc",
            "Bangalore",
            JobType::FullTime,
            "₹8L - ₹12L",
            "1 week ago",
            &["JavaScript", "React", "Node.js", "MongoDB"],
            "Build scalable web applications using modern tech stack...",
            true,
        ),
        listing(
            3,
            "Senior Backend Engineer",
            "InnovateTech",
            "Hyderabad",
            JobType::FullTime,
            "₹15L - ₹20L",
            "3 days ago",
            &["Python", "Django", "PostgreSQL", "AWS"],
            "Design distributed systems and microservices...",
            true,
        ),
        listing(
            4,
            "Frontend Developer",
            "WebCraft Solutions",
            "Remote",
            JobType::FullTime,
            "₹6L - ₹9L",
            "5 days ago",
            &["React", "TypeScript", "CSS"],
            "Create user interfaces with React and modern CSS...",
            false,
        ),
        listing(
            5,
            "Frontend Consultant",
            "Freelance Corp",
            "Mumbai",
            JobType::Contract,
            "₹1,200/hour",
            "1 week ago",
            &["React", "JavaScript", "HTML/CSS"],
            "Short-term frontend development consulting...",
            false,
        ),
        listing(
            6,
            "Data Science Contractor",
            "Analytics Hub",
            "Bangalore",
            JobType::Contract,
            "₹80,000/month",
            "4 days ago",
            &["Python", "Machine Learning", "SQL"],
            "Analyze data and build predictive models...",
            false,
        ),
        listing(
            7,
            "Contract Python Developer",
            "TempWork Inc",
            "Remote",
            JobType::Contract,
            "₹50,000 - ₹70,000",
            "2 weeks ago",
            &["Python", "Flask", "Docker"],
            "Backend development for contract period...",
            false,
        ),
    ]
}
