use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fixed application lifecycle, stored as a constrained text column.
pub const JOB_STATUSES: [&str; 5] = ["applied", "interviewing", "offered", "rejected", "accepted"];

pub const DEFAULT_STATUS: &str = "applied";

pub fn is_valid_status(status: &str) -> bool {
    JOB_STATUSES.contains(&status)
}

pub fn invalid_status_message() -> String {
    format!("Status must be one of: {}", JOB_STATUSES.join(", "))
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub job_title: String,
    pub job_description: Option<String>,
    pub job_url: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub status: String,
    pub applied_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobApplication {
    /// Description used for scoring; falls back to a synthesized one-liner
    /// when no description was recorded.
    pub fn description_for_scoring(&self) -> String {
        match self.job_description.as_deref().map(str::trim) {
            Some(desc) if !desc.is_empty() => desc.to_string(),
            _ => format!("Position: {} at {}", self.job_title, self.company_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_are_accepted() {
        for status in JOB_STATUSES {
            assert!(is_valid_status(status), "{status} should be valid");
        }
    }

    #[test]
    fn unknown_statuses_are_rejected() {
        assert!(!is_valid_status("ghosted"));
        assert!(!is_valid_status("Applied"));
        assert!(!is_valid_status(""));
    }

    fn sample_job(description: Option<&str>) -> JobApplication {
        JobApplication {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            company_name: "Acme".into(),
            job_title: "Engineer".into(),
            job_description: description.map(|s| s.to_string()),
            job_url: None,
            location: None,
            salary_range: None,
            status: DEFAULT_STATUS.into(),
            applied_date: Utc::now().date_naive(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn scoring_description_prefers_recorded_text() {
        let job = sample_job(Some("Build backend services in Rust"));
        assert_eq!(job.description_for_scoring(), "Build backend services in Rust");
    }

    #[test]
    fn scoring_description_falls_back_to_title_and_company() {
        assert_eq!(
            sample_job(None).description_for_scoring(),
            "Position: Engineer at Acme"
        );
        assert_eq!(
            sample_job(Some("   ")).description_for_scoring(),
            "Position: Engineer at Acme"
        );
    }
}
