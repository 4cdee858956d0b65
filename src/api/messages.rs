//! Contact message API endpoints.
//!
//! Submission is public (the landing-page contact form posts here);
//! listing, read-marking and deletion are admin operations.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{ContactMessage, CreateMessageRequest};
use crate::AppState;

/// POST /api/messages - Submit a contact message (public).
pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> ApiResult<ContactMessage> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.name.trim().is_empty() {
        return error(
            AppError::Validation("Name is required".to_string()),
            revision_id,
        );
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return error(
            AppError::Validation("A valid email is required".to_string()),
            revision_id,
        );
    }
    if request.message.trim().is_empty() {
        return error(
            AppError::Validation("Message is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_message(&request).await {
        Ok(message) => success(message, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/messages - List all contact messages, newest first.
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Vec<ContactMessage>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_messages().await {
        Ok(messages) => success(messages, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/messages/:id/read - Mark a contact message as read.
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ContactMessage> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.mark_message_read(&id).await {
        Ok(message) => success(message, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/messages/:id - Delete a contact message.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_message(&id).await {
        Ok(()) => success((), revision_id),
        Err(e) => error(e, revision_id),
    }
}
