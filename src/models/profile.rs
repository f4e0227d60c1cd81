//! Public user profiles (the admin "users" table view).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full profile row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query filters for the user list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileFilters {
    /// Case-insensitive substring matched against display name or email.
    pub q: Option<String>,
}

impl ProfileFilters {
    /// `ILIKE` pattern for `q`, or `None` when the search is absent or blank.
    pub fn pattern(&self) -> Option<String> {
        let term = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())?;
        let escaped = term
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        Some(format!("%{escaped}%"))
    }
}

/// The two columns the dashboard's recent-users strip reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProfileSummary {
    pub avatar_url: Option<String>,
    pub display_name: Option<String>,
}
