use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::match_result::MatchResult;
use crate::services::ai_service::ScoreReport;

const MATCH_COLUMNS: &str = "id, job_application_id, match_score, strengths, \
     missing_qualifications, suggestions, created_at";

/// Match cache store: keyed by job application id, upsert semantics. This is
/// pure memoization, not a general cache. There is no TTL and no eviction;
/// the only invalidation is explicit deletion.
#[derive(Clone)]
pub struct MatchService {
    pool: PgPool,
}

impl MatchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, job_application_id: Uuid) -> Result<Option<MatchResult>> {
        let query = format!(
            "SELECT {MATCH_COLUMNS} FROM match_results WHERE job_application_id = $1"
        );
        let result = sqlx::query_as::<_, MatchResult>(&query)
            .bind(job_application_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(result)
    }

    /// Single-statement upsert. Concurrent writers for the same job id race
    /// on the unique constraint; the last write lands, which is the accepted
    /// behavior.
    pub async fn upsert(
        &self,
        job_application_id: Uuid,
        report: &ScoreReport,
    ) -> Result<MatchResult> {
        let query = format!(
            "INSERT INTO match_results (
                job_application_id, match_score, strengths,
                missing_qualifications, suggestions
             ) VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (job_application_id) DO UPDATE SET
                match_score = EXCLUDED.match_score,
                strengths = EXCLUDED.strengths,
                missing_qualifications = EXCLUDED.missing_qualifications,
                suggestions = EXCLUDED.suggestions,
                created_at = NOW()
             RETURNING {MATCH_COLUMNS}"
        );
        let result = sqlx::query_as::<_, MatchResult>(&query)
            .bind(job_application_id)
            .bind(report.match_score)
            .bind(Json(&report.strengths))
            .bind(Json(&report.missing_qualifications))
            .bind(Json(&report.suggestions))
            .fetch_one(&self.pool)
            .await?;
        Ok(result)
    }

    /// Returns how many rows were removed (0 or 1).
    pub async fn delete(&self, job_application_id: Uuid) -> Result<u64> {
        let res = sqlx::query("DELETE FROM match_results WHERE job_application_id = $1")
            .bind(job_application_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
