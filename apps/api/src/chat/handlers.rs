use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chat::personas::Persona;
use crate::errors::AppError;
use crate::llm_client::CallOptions;
use crate::models::chat::ChatMessage;
use crate::state::AppState;

/// Replies are capped well below the model maximum; coaching answers should
/// stay short enough to read in a chat pane.
const CHAT_MAX_TOKENS: u32 = 500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub persona: Persona,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub project_context: Value,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.messages.is_empty() {
        return Err(AppError::Validation("Messages array is required".into()));
    }

    if state.config.mock_mode() {
        return Ok(Json(ChatResponse {
            text: req.persona.mock_reply().to_string(),
        }));
    }

    let system = req.persona.system_prompt(&req.project_context);
    let text = state
        .llm
        .chat(
            &system,
            &req.messages,
            CallOptions {
                temperature: req.persona.temperature(),
                max_tokens: Some(CHAT_MAX_TOKENS),
                json_output: false,
            },
        )
        .await?;

    Ok(Json(ChatResponse { text }))
}
