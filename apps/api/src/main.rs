mod config;
mod errors;
mod jobs;
mod resume;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::client::JSearchClient;
use crate::routes::build_router;
use crate::skills::taxonomy::{LOCATIONS, SKILL_TAXONOMY};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing JOBS_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Skill taxonomy: {} categories, {} locations",
        SKILL_TAXONOMY.len(),
        LOCATIONS.len()
    );

    // Initialize job search client
    let job_search = JSearchClient::new(&config)?;
    info!(
        "Job search client initialized (host: {}, timeout: {}s)",
        config.jobs_api_host, config.jobs_request_timeout_secs
    );

    let state = AppState {
        config: config.clone(),
        job_search: Arc::new(job_search),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
