mod config;
mod db;
mod errors;
mod extract;
mod llm_client;
mod models;
mod routes;
mod skills;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::LlmSkillExtractor;
use crate::state::AppState;
use crate::store::PgRecordStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume skills API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (no connectivity check)
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize PostgreSQL; refuse to serve if it is unreachable
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    let state = AppState {
        skills: Arc::new(LlmSkillExtractor::new(llm)),
        records: Arc::new(PgRecordStore::new(db)),
        upload_limit_mb: config.upload_limit_mb,
    };
    info!("Upload limit: {}MB", config.upload_limit_mb);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
