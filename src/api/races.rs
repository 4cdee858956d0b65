//! Race API endpoints. Listing is public; writes are admin-only.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateRaceRequest, Race, UpdateRaceRequest};
use crate::AppState;

/// GET /api/races - List all races, newest first.
pub async fn list_races(State(state): State<AppState>) -> ApiResult<Vec<Race>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_races().await {
        Ok(races) => success(races, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/races - Create a race entry.
pub async fn create_race(
    State(state): State<AppState>,
    Json(request): Json<CreateRaceRequest>,
) -> ApiResult<Race> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_race(&request).await {
        Ok(race) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(race, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/races/:id - Update a race entry.
pub async fn update_race(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRaceRequest>,
) -> ApiResult<Race> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.update_race(&id, &request).await {
        Ok(race) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(race, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/races/:id - Delete a race entry.
pub async fn delete_race(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_race(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
