//! Public roster endpoints: the grouped team directory and the landing-page
//! marquee strip.

use axum::extract::State;
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::models::{TeamMember, DEFAULT_TEAM_CAPTION, KEY_TEAM_CAPTION};
use crate::roster;
use crate::AppState;

/// Grouped roster with the team-section caption.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub caption: String,
    pub groups: Vec<roster::RankGroup>,
}

/// GET /api/roster - The team directory, grouped by rank and sub-team.
pub async fn get_roster(State(state): State<AppState>) -> ApiResult<RosterResponse> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let members = match state.repo.list_members().await {
        Ok(members) => members,
        Err(e) => return error(e, revision_id),
    };

    let caption = match state.repo.get_setting(KEY_TEAM_CAPTION).await {
        Ok(Some(setting)) => setting.value,
        Ok(None) => DEFAULT_TEAM_CAPTION.to_string(),
        Err(e) => return error(e, revision_id),
    };

    success(
        RosterResponse {
            caption,
            groups: roster::group_roster(&members),
        },
        revision_id,
    )
}

/// GET /api/roster/marquee - Sorted flat member list rotated so the
/// highest-ranked member sits at the center of the strip.
pub async fn get_marquee(State(state): State<AppState>) -> ApiResult<Vec<TeamMember>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.list_members().await {
        Ok(members) => success(roster::marquee_order(&members), revision_id),
        Err(e) => error(e, revision_id),
    }
}
