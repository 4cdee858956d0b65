//! Activity API endpoints. Listing is public; writes are admin-only.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Activity, CreateActivityRequest, UpdateActivityRequest};
use crate::AppState;

/// GET /api/activities - List all activities, newest first.
pub async fn list_activities(State(state): State<AppState>) -> ApiResult<Vec<Activity>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_activities().await {
        Ok(activities) => success(activities, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/activities - Create an activity.
pub async fn create_activity(
    State(state): State<AppState>,
    Json(request): Json<CreateActivityRequest>,
) -> ApiResult<Activity> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_activity(&request).await {
        Ok(activity) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(activity, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/activities/:id - Update an activity.
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateActivityRequest>,
) -> ApiResult<Activity> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.update_activity(&id, &request).await {
        Ok(activity) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(activity, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/activities/:id - Delete an activity.
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_activity(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
