use std::sync::Arc;

use crate::config::Config;
use crate::jobs::board::JobBoard;
use crate::skills::engine::SkillEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless skill engine shared by every evaluation flow.
    pub engine: Arc<SkillEngine>,
    pub job_board: Arc<JobBoard>,
}

impl AppState {
    pub fn new(config: Config, engine: SkillEngine, job_board: JobBoard) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
            job_board: Arc::new(job_board),
        }
    }
}
