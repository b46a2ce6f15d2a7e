//! Axum route handlers for the Jobs API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::board::{JobListing, JobMatch, JobQuery};
use crate::jobs::market::{
    analyze_skill_gap, MarketSkill, SkillGapReport, SoftSkill, KEY_INSIGHT, TOP_SKILLS_GLOBAL,
    TOP_SOFT_SKILLS,
};
use crate::skills::skill_set::SkillSet;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobMatch>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    pub skills: Vec<String>,
    #[serde(default, alias = "role", alias = "target_role")]
    pub target_role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSkillsResponse {
    pub technical_skills: &'static [MarketSkill],
    pub soft_skills: &'static [SoftSkill],
    pub key_insight: &'static str,
}

/// POST /api/v1/jobs/search
///
/// Filters the board and attaches a skill match for every listing returned.
pub async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<JobQuery>, JsonRejection>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let Json(query) = payload?;

    let jobs = state.job_board.search(&query, state.engine.mode());
    tracing::debug!(results = jobs.len(), "job search completed");

    Ok(Json(JobSearchResponse {
        total: jobs.len(),
        jobs,
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<JobListing>, AppError> {
    state
        .job_board
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/v1/jobs/market/skill-gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    payload: Result<Json<SkillGapRequest>, JsonRejection>,
) -> Result<Json<SkillGapReport>, AppError> {
    let Json(request) = payload?;

    if request.target_role.trim().is_empty() {
        return Err(AppError::Validation("targetRole must not be blank".to_string()));
    }

    let report = analyze_skill_gap(
        SkillSet::from(request.skills),
        &request.target_role,
        &state.engine,
    );

    Ok(Json(report))
}

/// GET /api/v1/jobs/market/skills
pub async fn handle_market_skills() -> Json<MarketSkillsResponse> {
    Json(MarketSkillsResponse {
        technical_skills: TOP_SKILLS_GLOBAL,
        soft_skills: TOP_SOFT_SKILLS,
        key_insight: KEY_INSIGHT,
    })
}
