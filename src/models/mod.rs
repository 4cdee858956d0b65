//! Data models for the YILDIRIM team site.
//!
//! These models match the admin panel's TypeScript interfaces exactly for seamless interoperability.

mod activity;
mod member;
mod message;
mod news;
mod race;
mod settings;
mod sponsor;
mod vehicle;

pub use activity::*;
pub use member::*;
pub use message::*;
pub use news::*;
pub use race::*;
pub use settings::*;
pub use sponsor::*;
pub use vehicle::*;

use serde::{Deserialize, Serialize};

/// Revision information for change detection.
///
/// Every admin write bumps the datastore revision; clients key cached
/// snapshots on it and refetch when it moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}
