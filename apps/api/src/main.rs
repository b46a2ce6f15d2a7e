mod config;
mod errors;
mod jobs;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::board::JobBoard;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Dictionary is fixed from here on
    let engine = config.build_engine()?;
    info!(
        "Skill engine ready: {} skills, {:?} matching, up to {} recommendations",
        engine.dictionary().len(),
        engine.mode(),
        engine.max_recommendations()
    );

    let job_board = JobBoard::seeded();
    info!("Job board loaded with {} listings", job_board.listings().len());

    let state = AppState::new(config.clone(), engine, job_board);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the web frontend's host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
