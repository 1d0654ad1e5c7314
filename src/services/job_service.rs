use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::job_dto::{CreateJobPayload, JobBoard, JobStats, UpdateJobPayload};
use crate::error::Result;
use crate::models::job_application::{JobApplication, DEFAULT_STATUS};

const JOB_COLUMNS: &str = "id, user_id, company_name, job_title, job_description, job_url, \
     location, salary_range, status, applied_date, notes, created_at, updated_at";

/// Job record store plus CRUD orchestration. Every read and write filters by
/// owner id, so cross-tenant access is impossible at the query level.
#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, payload: CreateJobPayload) -> Result<JobApplication> {
        let status = payload
            .status
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());
        let applied_date = payload
            .applied_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let query = format!(
            "INSERT INTO job_applications (
                user_id, company_name, job_title, job_description,
                job_url, location, salary_range, status, applied_date, notes
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {JOB_COLUMNS}"
        );
        let job = sqlx::query_as::<_, JobApplication>(&query)
            .bind(user_id)
            .bind(&payload.company_name)
            .bind(&payload.job_title)
            .bind(&payload.job_description)
            .bind(&payload.job_url)
            .bind(&payload.location)
            .bind(&payload.salary_range)
            .bind(&status)
            .bind(applied_date)
            .bind(&payload.notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(job)
    }

    pub async fn list(&self, user_id: Uuid, status: Option<&str>) -> Result<Vec<JobApplication>> {
        let jobs = match status {
            Some(status) => {
                let query = format!(
                    "SELECT {JOB_COLUMNS} FROM job_applications
                     WHERE user_id = $1 AND status = $2
                     ORDER BY applied_date DESC, created_at DESC"
                );
                sqlx::query_as::<_, JobApplication>(&query)
                    .bind(user_id)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {JOB_COLUMNS} FROM job_applications
                     WHERE user_id = $1
                     ORDER BY applied_date DESC, created_at DESC"
                );
                sqlx::query_as::<_, JobApplication>(&query)
                    .bind(user_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(jobs)
    }

    pub async fn get(&self, id: Uuid, user_id: Uuid) -> Result<Option<JobApplication>> {
        let query = format!(
            "SELECT {JOB_COLUMNS} FROM job_applications WHERE id = $1 AND user_id = $2"
        );
        let job = sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    /// Field-level merge: absent payload fields keep their stored values.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        payload: UpdateJobPayload,
    ) -> Result<Option<JobApplication>> {
        let query = format!(
            "UPDATE job_applications
             SET
                company_name = COALESCE($3, company_name),
                job_title = COALESCE($4, job_title),
                job_description = COALESCE($5, job_description),
                job_url = COALESCE($6, job_url),
                location = COALESCE($7, location),
                salary_range = COALESCE($8, salary_range),
                status = COALESCE($9, status),
                applied_date = COALESCE($10, applied_date),
                notes = COALESCE($11, notes),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {JOB_COLUMNS}"
        );
        let job = sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&payload.company_name)
            .bind(&payload.job_title)
            .bind(&payload.job_description)
            .bind(&payload.job_url)
            .bind(&payload.location)
            .bind(&payload.salary_range)
            .bind(&payload.status)
            .bind(payload.applied_date)
            .bind(&payload.notes)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    /// Deletes an owned row; the match_results cascade happens at the store
    /// layer via the foreign key.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<Option<JobApplication>> {
        let query = format!(
            "DELETE FROM job_applications WHERE id = $1 AND user_id = $2 RETURNING {JOB_COLUMNS}"
        );
        let job = sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    pub async fn board(&self, user_id: Uuid) -> Result<JobBoard> {
        let jobs = self.list(user_id, None).await?;
        Ok(Self::partition_by_status(jobs))
    }

    pub fn partition_by_status(jobs: Vec<JobApplication>) -> JobBoard {
        let mut board = JobBoard::default();
        for job in jobs {
            let bucket = match job.status.as_str() {
                "interviewing" => &mut board.interviewing,
                "offered" => &mut board.offered,
                "rejected" => &mut board.rejected,
                "accepted" => &mut board.accepted,
                _ => &mut board.applied,
            };
            bucket.push(job.into());
        }
        board
    }

    /// Total plus per-status counts in one pass.
    pub async fn stats(&self, user_id: Uuid) -> Result<JobStats> {
        let stats = sqlx::query_as::<_, JobStats>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'applied') AS applied,
                COUNT(*) FILTER (WHERE status = 'interviewing') AS interviewing,
                COUNT(*) FILTER (WHERE status = 'offered') AS offered,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected,
                COUNT(*) FILTER (WHERE status = 'accepted') AS accepted
             FROM job_applications
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(status: &str) -> JobApplication {
        JobApplication {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            company_name: "Acme".into(),
            job_title: "Engineer".into(),
            job_description: None,
            job_url: None,
            location: None,
            salary_range: None,
            status: status.into(),
            applied_date: Utc::now().date_naive(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn board_has_every_bucket_even_when_empty() {
        let board = JobService::partition_by_status(vec![]);
        assert!(board.applied.is_empty());
        assert!(board.interviewing.is_empty());
        assert!(board.offered.is_empty());
        assert!(board.rejected.is_empty());
        assert!(board.accepted.is_empty());
    }

    #[test]
    fn board_partitions_into_status_buckets() {
        let board = JobService::partition_by_status(vec![
            job("applied"),
            job("interviewing"),
            job("interviewing"),
            job("accepted"),
        ]);
        assert_eq!(board.applied.len(), 1);
        assert_eq!(board.interviewing.len(), 2);
        assert_eq!(board.accepted.len(), 1);
        assert!(board.offered.is_empty());
        assert!(board.rejected.is_empty());
    }
}
