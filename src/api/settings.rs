//! Site settings API endpoints. Single-key reads are public (section
//! captions render on the landing page); listing and upserts are admin-only.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{PutSettingRequest, SiteSetting};
use crate::AppState;

/// GET /api/settings - List all settings.
pub async fn list_settings(State(state): State<AppState>) -> ApiResult<Vec<SiteSetting>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_settings().await {
        Ok(settings) => success(settings, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/settings/:key - Get a single setting.
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<SiteSetting> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.get_setting(&key).await {
        Ok(Some(setting)) => success(setting, revision_id),
        Ok(None) => error(
            AppError::NotFound(format!("Setting {} not found", key)),
            revision_id,
        ),
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/settings/:key - Insert or replace a setting.
pub async fn put_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<PutSettingRequest>,
) -> ApiResult<SiteSetting> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if key.trim().is_empty() {
        return error(
            AppError::Validation("Setting key is required".to_string()),
            revision_id,
        );
    }

    match state.repo.put_setting(&key, &request.value).await {
        Ok(setting) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(setting, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
