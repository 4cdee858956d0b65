//! Site settings and dashboard models.

use serde::{Deserialize, Serialize};

/// Site setting key for the team-section caption.
pub const KEY_TEAM_CAPTION: &str = "desc_team";

/// Default team-section caption when no setting is stored.
pub const DEFAULT_TEAM_CAPTION: &str = "Başarının arkasındaki güç";

/// A key/value site setting (section captions, logo URL, about cards as JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

/// Request body for upserting a site setting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSettingRequest {
    pub value: String,
}

/// Entity counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub members: i64,
    pub vehicles: i64,
    pub news: i64,
    pub races: i64,
    pub activities: i64,
    pub sponsors: i64,
    pub messages: i64,
    pub unread_messages: i64,
}
