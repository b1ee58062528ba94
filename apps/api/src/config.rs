use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default except the API key, which is only required
/// when LLM scoring is switched on.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional JSON file overriding the built-in role catalog.
    pub role_catalog_path: Option<String>,
    /// Selects the `LlmAnalyzer` strategy instead of the deterministic engine.
    pub enable_llm_scoring: bool,
    pub anthropic_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let enable_llm_scoring = std::env::var("ENABLE_LLM_SCORING")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        if enable_llm_scoring && anthropic_api_key.is_none() {
            anyhow::bail!("ENABLE_LLM_SCORING is set but ANTHROPIC_API_KEY is not");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            role_catalog_path: std::env::var("ROLE_CATALOG_PATH").ok(),
            enable_llm_scoring,
            anthropic_api_key,
        })
    }
}
