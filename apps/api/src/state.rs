use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::ratelimit::FixedWindowLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Per-client quota for plan generation. Arc so router clones share the
    /// same window records.
    pub plan_limiter: Arc<FixedWindowLimiter>,
}
