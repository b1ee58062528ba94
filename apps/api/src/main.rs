mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::roles::RoleCatalog;
use crate::analysis::strategy::{DeterministicAnalyzer, LlmAnalyzer, ResumeAnalyzer};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Role catalog: built-in data unless ROLE_CATALOG_PATH points at JSON
    let catalog = match &config.role_catalog_path {
        Some(path) => {
            info!("Loading role catalog from {path}");
            Arc::new(RoleCatalog::from_json_file(path)?)
        }
        None => Arc::new(RoleCatalog::builtin()),
    };
    info!("Role catalog ready ({} roles)", catalog.profiles.len());

    // Scoring strategy: deterministic by default, LLM behind ENABLE_LLM_SCORING
    let analyzer: Arc<dyn ResumeAnalyzer> = if config.enable_llm_scoring {
        let api_key = config
            .anthropic_api_key
            .clone()
            .unwrap_or_default(); // presence already enforced by Config::from_env
        info!("Analyzer: llm (model: {})", llm_client::MODEL);
        Arc::new(LlmAnalyzer::new(LlmClient::new(api_key), catalog.clone()))
    } else {
        info!("Analyzer: deterministic");
        Arc::new(DeterministicAnalyzer::new(catalog.clone()))
    };

    let state = AppState {
        config: config.clone(),
        catalog,
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
