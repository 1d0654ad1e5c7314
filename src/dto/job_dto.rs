use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::job_application::JobApplication;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1, message = "Company name is required."))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Job title is required."))]
    pub job_title: String,
    pub job_description: Option<String>,
    pub job_url: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub status: Option<String>,
    pub applied_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub company_name: Option<String>,
    #[validate(length(min = 1))]
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub job_url: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub status: Option<String>,
    pub applied_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub message: Option<String>,
    pub job: JobApplication,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub count: usize,
    pub jobs: Vec<JobApplication>,
}

/// Trimmed card for the board view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardCard {
    pub id: Uuid,
    pub company_name: String,
    pub job_title: String,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub applied_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<JobApplication> for BoardCard {
    fn from(job: JobApplication) -> Self {
        Self {
            id: job.id,
            company_name: job.company_name,
            job_title: job.job_title,
            location: job.location,
            salary_range: job.salary_range,
            applied_date: job.applied_date,
            created_at: job.created_at,
        }
    }
}

/// One bucket per status value, always present even when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobBoard {
    pub applied: Vec<BoardCard>,
    pub interviewing: Vec<BoardCard>,
    pub offered: Vec<BoardCard>,
    pub rejected: Vec<BoardCard>,
    pub accepted: Vec<BoardCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    pub board: JobBoard,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobStats {
    pub total: i64,
    pub applied: i64,
    pub interviewing: i64,
    pub offered: i64,
    pub rejected: i64,
    pub accepted: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: JobStats,
}
