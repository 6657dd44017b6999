use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `OPENAI_API_KEY` is deliberately optional: without it the service runs in
/// mock mode (canned plans and persona replies) so the frontend can be
/// developed against it offline.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Max gated plan-generation requests per client per window.
    pub plan_rate_limit_max: u32,
    /// Rate-limit window length in seconds.
    pub plan_rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            plan_rate_limit_max: std::env::var("PLAN_RATE_LIMIT_MAX")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<u32>()
                .context("PLAN_RATE_LIMIT_MAX must be a positive integer")?,
            plan_rate_limit_window_secs: std::env::var("PLAN_RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("PLAN_RATE_LIMIT_WINDOW_SECS must be a positive integer")?,
        })
    }

    /// True when no API key is configured and LLM-backed endpoints should
    /// serve canned responses instead of calling upstream.
    pub fn mock_mode(&self) -> bool {
        self.openai_api_key.is_none()
    }
}
