use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// AI compatibility assessment, at most one live row per job application
/// (unique foreign key). Replaced in place on re-analysis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchResult {
    pub id: Uuid,
    pub job_application_id: Uuid,
    pub match_score: i32,
    pub strengths: Json<Vec<String>>,
    pub missing_qualifications: Json<Vec<String>>,
    pub suggestions: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
