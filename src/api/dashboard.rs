//! Admin dashboard endpoint.

use axum::extract::State;

use super::{error, success, ApiResult};
use crate::models::DashboardStats;
use crate::AppState;

/// GET /api/dashboard - Entity counts for the admin overview cards.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.dashboard_stats().await {
        Ok(stats) => success(stats, revision_id),
        Err(e) => error(e, revision_id),
    }
}
