//! Contact message model for the public contact form.

use serde::{Deserialize, Serialize};

/// A message submitted through the landing page contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

/// Request body for submitting a contact message (public, unauthenticated).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
