//! Admin-sent notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    /// `None` means broadcast to every user.
    pub recipient_id: Option<Uuid>,
    pub sent_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendNotification {
    #[validate(length(min = 1, max = 120, message = "must be 1 to 120 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 2000, message = "must be 1 to 2000 characters"))]
    pub message: String,
    pub recipient_id: Option<Uuid>,
}

impl SendNotification {
    /// Strip surrounding whitespace so validation sees what gets stored.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            message: self.message.trim().to_string(),
            recipient_id: self.recipient_id,
        }
    }
}
