//! Assistant tool routes — the surface the external conversation service
//! calls while a voice session is live.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::Value;

use crate::llm::tools::booking_tools;
use crate::llm::types::Tool;
use crate::services::assistant::{self, AssistantError};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ToolCallResponse {
    pub content: String,
}

/// `GET /api/assistant/tools` — list the tool definitions the conversation
/// service binds at session start.
pub async fn list_tools() -> Json<Vec<Tool>> {
    Json(booking_tools())
}

/// `POST /api/assistant/tools/:name` — execute a named tool with a JSON
/// input object; the response carries the assistant's spoken answer.
pub async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(input): Json<Value>,
) -> Result<Json<ToolCallResponse>, StatusCode> {
    let content = assistant::execute_tool(&state, &name, &input)
        .await
        .map_err(assistant_error_to_status)?;

    Ok(Json(ToolCallResponse { content }))
}

pub(crate) fn assistant_error_to_status(err: AssistantError) -> StatusCode {
    match err {
        AssistantError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
