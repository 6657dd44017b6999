use axum::{extract::State, http::HeaderMap, Json};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::CallOptions;
use crate::models::project::ProjectPlan;
use crate::plan::{mock, prompts};
use crate::ratelimit::{client_id_from_headers, RateDecision};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    #[serde(default)]
    pub goal: String,
    #[serde(default = "default_experience")]
    pub experience: String,
    #[serde(default)]
    pub generate_new: bool,
}

fn default_experience() -> String {
    "beginner".to_string()
}

/// POST /api/v1/plan
///
/// Gated by the per-client fixed-window limiter: plan generation is the one
/// expensive upstream call a user can hammer by mashing "new project".
pub async fn handle_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<PlanRequest>,
) -> Result<Json<ProjectPlan>, AppError> {
    let client_id = client_id_from_headers(&headers);
    if let RateDecision::Limited { retry_after_secs } = state.plan_limiter.check_now(&client_id) {
        warn!("Plan generation rate limited for {client_id}, retry in {retry_after_secs}s");
        return Err(AppError::RateLimited { retry_after_secs });
    }

    if state.config.mock_mode() {
        let plan = mock::pick(chrono::Utc::now().timestamp_millis() as u64);
        info!("Serving mock plan '{}' (no API key configured)", plan.title);
        return Ok(Json(plan));
    }

    let user_prompt = prompts::build_user_prompt(&req.goal, &req.experience, req.generate_new);
    let temperature = if req.generate_new { 1.0 } else { 0.8 };

    let plan: ProjectPlan = state
        .llm
        .chat_json(
            prompts::PLAN_SYSTEM,
            &user_prompt,
            CallOptions {
                temperature,
                max_tokens: None,
                json_output: true,
            },
        )
        .await?;

    Ok(Json(plan.normalize()))
}
