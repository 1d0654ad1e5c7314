use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub resume_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Resume text usable for analysis, if any. Whitespace-only text counts
    /// as absent.
    pub fn resume(&self) -> Option<&str> {
        self.resume_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
