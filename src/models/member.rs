//! Team member model matching the admin panel TeamMember interface.

use serde::{Deserialize, Serialize};

/// A member of the team roster.
///
/// `rank` is stored as free text and interpreted against the closed
/// enumeration defensively at read time; unrecognized values are kept and
/// sorted last rather than rejected. `sub_team` only carries meaning for the
/// "subteam lead" and "general member" ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub rank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_team: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new team member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub rank: String,
    #[serde(default)]
    pub sub_team: Option<String>,
}

/// Request body for updating an existing team member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub sub_team: Option<String>,
}
