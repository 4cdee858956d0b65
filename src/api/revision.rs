//! Datastore revision endpoint.
//!
//! Public: site clients poll this to decide whether a cached snapshot of the
//! content is still current. Every admin write bumps the revision.

use axum::extract::State;

use super::{error, success, ApiResult};
use crate::models::RevisionInfo;
use crate::AppState;

/// GET /api/revision - Current datastore revision.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.get_revision_info().await {
        Ok(info) => success(info, revision_id),
        Err(e) => error(e, revision_id),
    }
}
