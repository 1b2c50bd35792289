use anyhow::{Context, Result};

/// Bounded list size from the ranking backend (§top-K contract).
const MAX_TOP_K: usize = 50;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub ranking_api_url: String,
    pub port: u16,
    pub rust_log: String,
    pub top_k: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let top_k = std::env::var("TOP_K")
            .unwrap_or_else(|_| MAX_TOP_K.to_string())
            .parse::<usize>()
            .context("TOP_K must be a positive integer")?;

        Ok(Config {
            ranking_api_url: require_env("RANKING_API_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            top_k: top_k.clamp(1, MAX_TOP_K),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
