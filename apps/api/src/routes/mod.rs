pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skills API
        .route("/api/v1/skills/evaluate", post(skills::handle_evaluate))
        .route("/api/v1/skills/match", post(skills::handle_match))
        .route("/api/v1/skills/dictionary", get(skills::handle_dictionary))
        // Jobs API
        .route("/api/v1/jobs/search", post(jobs::handle_search))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route(
            "/api/v1/jobs/market/skill-gap",
            post(jobs::handle_skill_gap),
        )
        .route(
            "/api/v1/jobs/market/skills",
            get(jobs::handle_market_skills),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::jobs::board::JobBoard;
    use crate::skills::engine::SkillEngine;

    fn app() -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        build_router(AppState::new(config, SkillEngine::default(), JobBoard::seeded()))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_evaluate_reports_gaps() {
        let (status, body) = send(post_json(
            "/api/v1/skills/evaluate",
            json!({
                "candidateText": "Experienced in JavaScript and React",
                "requiredText": "Looking for Python and SQL expert"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 0);
        assert_eq!(body["matchedSkills"], json!([]));
        assert_eq!(body["missingSkills"], json!(["Python", "SQL"]));
        assert_eq!(
            body["recommendations"][0]["text"],
            "Learn these key skills: Python, SQL"
        );
    }

    #[tokio::test]
    async fn test_evaluate_appends_declared_skills() {
        let (status, body) = send(post_json(
            "/api/v1/skills/evaluate",
            json!({
                "candidateText": "",
                "requiredText": "Docker and Kubernetes",
                "candidateSkills": ["Docker"]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchedSkills"], json!(["Docker"]));
        assert_eq!(body["matchPercentage"], 50);
    }

    #[tokio::test]
    async fn test_evaluate_empty_requirement_is_not_an_error() {
        let (status, body) = send(post_json(
            "/api/v1/skills/evaluate",
            json!({ "candidateText": "Python", "requiredText": "" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchPercentage"], 0);
        assert_eq!(body["missingSkills"], json!([]));
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_evaluate_missing_field_is_validation_error() {
        let (status, body) = send(post_json(
            "/api/v1/skills/evaluate",
            json!({ "candidateText": "Python" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/skills/match")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_variant_skips_extraction() {
        let (status, body) = send(post_json(
            "/api/v1/skills/match",
            json!({
                "candidateSkills": ["Rust", "rust"],
                "requiredSkills": ["Rust", "Go"]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchedSkills"], json!(["Rust"]));
        assert_eq!(body["missingSkills"], json!(["Go"]));
        assert_eq!(body["matchPercentage"], 50);
    }

    #[tokio::test]
    async fn test_dictionary_lists_builtin_skills() {
        let (status, body) = send(get_req("/api/v1/skills/dictionary")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"].as_array().unwrap().len(), 38);
        assert_eq!(body["matchMode"], "substring");
        assert_eq!(body["source"], "builtin");
    }

    #[tokio::test]
    async fn test_job_search_filters_and_scores() {
        let (status, body) = send(post_json(
            "/api/v1/jobs/search",
            json!({ "query": "python", "location": "Remote", "skills": ["Python"] }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["jobs"][0]["id"], 1);
        assert_eq!(body["jobs"][0]["matchPercentage"], 50);
        assert_eq!(body["jobs"][1]["id"], 7);
        assert_eq!(body["jobs"][1]["type"], "Contract");
    }

    #[tokio::test]
    async fn test_get_job() {
        let (status, body) = send(get_req("/api/v1/jobs/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Full Stack Engineer");

        let (status, body) = send(get_req("/api/v1/jobs/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_skill_gap_uses_shared_matcher() {
        let (status, body) = send(post_json(
            "/api/v1/jobs/market/skill-gap",
            json!({ "skills": ["python"], "role": "data scientist" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["targetRole"], "data scientist");
        assert_eq!(body["skillsMatched"], json!(["python"]));
        // 1 of 6
        assert_eq!(body["matchPercent"], 17);
        assert_eq!(body["prioritySkills"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_skill_gap_requires_target_role() {
        let bodies = [
            json!({ "skills": ["python"] }),
            json!({ "skills": [], "targetRole": "  " }),
        ];
        for body in bodies {
            let (status, body) = send(post_json("/api/v1/jobs/market/skill-gap", body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            assert_eq!(body["error"]["message"], "targetRole must not be blank");
        }
    }

    #[tokio::test]
    async fn test_market_skills_reference_data() {
        let (status, body) = send(get_req("/api/v1/jobs/market/skills")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["technicalSkills"].as_array().unwrap().len(), 10);
        assert_eq!(body["softSkills"][0]["skill"], "Creative Thinking");
    }
}
