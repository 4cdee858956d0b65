//! Sponsor API endpoints. Listing is public; writes are admin-only.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateSponsorRequest, Sponsor, UpdateSponsorRequest};
use crate::AppState;

/// GET /api/sponsors - List all sponsors, newest first.
pub async fn list_sponsors(State(state): State<AppState>) -> ApiResult<Vec<Sponsor>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_sponsors().await {
        Ok(sponsors) => success(sponsors, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/sponsors - Create a sponsor.
pub async fn create_sponsor(
    State(state): State<AppState>,
    Json(request): Json<CreateSponsorRequest>,
) -> ApiResult<Sponsor> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.name.trim().is_empty() {
        return error(
            AppError::Validation("Name is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_sponsor(&request).await {
        Ok(sponsor) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(sponsor, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/sponsors/:id - Update a sponsor.
pub async fn update_sponsor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateSponsorRequest>,
) -> ApiResult<Sponsor> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.update_sponsor(&id, &request).await {
        Ok(sponsor) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(sponsor, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/sponsors/:id - Delete a sponsor.
pub async fn delete_sponsor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_sponsor(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
