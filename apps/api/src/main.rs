mod chat;
mod config;
mod errors;
mod export;
mod llm_client;
mod models;
mod plan;
mod ratelimit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::ratelimit::FixedWindowLimiter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Milepost API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client; without a key the service serves mock responses
    let llm = LlmClient::new(config.openai_api_key.clone().unwrap_or_default());
    if config.mock_mode() {
        info!("No OPENAI_API_KEY set; serving mock chat and plan responses");
    } else {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    }

    // Initialize the plan-generation rate limiter
    let plan_limiter = Arc::new(FixedWindowLimiter::new(
        config.plan_rate_limit_max,
        Duration::from_secs(config.plan_rate_limit_window_secs),
    ));
    info!(
        "Plan rate limit: {} requests per {}s window",
        config.plan_rate_limit_max, config.plan_rate_limit_window_secs
    );

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
        plan_limiter,
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: tighten CORS in production
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
