//! Writing-assistant API endpoint (admin AI modal).

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::AppState;

/// Request body for a generation call.
#[derive(Debug, Deserialize)]
pub struct AssistRequest {
    pub prompt: String,
}

/// Generated text and the model that produced it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistResponse {
    pub text: String,
    pub used_model: String,
}

/// POST /api/assist - Generate draft copy for the admin panel.
pub async fn generate_text(
    State(state): State<AppState>,
    Json(request): Json<AssistRequest>,
) -> ApiResult<AssistResponse> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.prompt.trim().is_empty() {
        return error(
            AppError::Validation("Prompt is required".to_string()),
            revision_id,
        );
    }

    match state.assist.generate(&request.prompt).await {
        Ok(outcome) => success(
            AssistResponse {
                text: outcome.text,
                used_model: outcome.used_model,
            },
            revision_id,
        ),
        Err(e) => error(e, revision_id),
    }
}
