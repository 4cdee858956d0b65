//! News API endpoints. Listing and detail are public; writes are admin-only.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateNewsRequest, NewsItem, UpdateNewsRequest};
use crate::AppState;

/// GET /api/news - List all news, newest first.
pub async fn list_news(State(state): State<AppState>) -> ApiResult<Vec<NewsItem>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_news().await {
        Ok(news) => success(news, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/news/:id - Get a single news article (detail page).
pub async fn get_news(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<NewsItem> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.get_news(&id).await {
        Ok(Some(item)) => success(item, revision_id),
        Ok(None) => error(
            AppError::NotFound(format!("News {} not found", id)),
            revision_id,
        ),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/news - Create a news article.
pub async fn create_news(
    State(state): State<AppState>,
    Json(request): Json<CreateNewsRequest>,
) -> ApiResult<NewsItem> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.title.trim().is_empty() {
        return error(
            AppError::Validation("Title is required".to_string()),
            revision_id,
        );
    }
    if request.content.trim().is_empty() {
        return error(
            AppError::Validation("Content is required".to_string()),
            revision_id,
        );
    }

    match state.repo.create_news(&request).await {
        Ok(item) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(item, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/news/:id - Update a news article.
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNewsRequest>,
) -> ApiResult<NewsItem> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.update_news(&id, &request).await {
        Ok(item) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(item, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/news/:id - Delete a news article.
pub async fn delete_news(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.delete_news(&id).await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}
