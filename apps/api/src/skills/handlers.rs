//! Axum route handlers for the Skills API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::skills::engine::Evaluation;
use crate::skills::matcher::MatchMode;
use crate::skills::skill_set::SkillSet;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub candidate_text: String,
    pub required_text: String,
    /// Declared profile skills, appended to the candidate text before extraction.
    #[serde(default)]
    pub candidate_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub candidate_skills: Vec<String>,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryResponse {
    pub skills: Vec<String>,
    pub match_mode: MatchMode,
    /// "builtin" or the configured file path.
    pub source: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/skills/evaluate
///
/// Extracts skills from both texts and returns the match, gaps, and recommendations.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<Evaluation>, AppError> {
    let Json(request) = payload?;

    let candidate_text = if request.candidate_skills.is_empty() {
        request.candidate_text
    } else {
        format!(
            "{} {}",
            request.candidate_text,
            request.candidate_skills.join(" ")
        )
    };

    let evaluation = state
        .engine
        .evaluate(&candidate_text, &request.required_text);

    Ok(Json(evaluation))
}

/// POST /api/v1/skills/match
///
/// Job-match variant: both sides are already skill lists, so extraction is skipped.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<Evaluation>, AppError> {
    let Json(request) = payload?;

    let evaluation = state.engine.compare(
        SkillSet::from(request.candidate_skills),
        SkillSet::from(request.required_skills),
    );

    Ok(Json(evaluation))
}

/// GET /api/v1/skills/dictionary
pub async fn handle_dictionary(State(state): State<AppState>) -> Json<DictionaryResponse> {
    let skills = state
        .engine
        .dictionary()
        .all_skills()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();

    let source = state
        .config
        .dictionary_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());

    Json(DictionaryResponse {
        skills,
        match_mode: state.engine.mode(),
        source,
    })
}
