use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job_application::JobApplication;
use crate::models::match_result::MatchResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzePayload {
    pub job_application_id: Uuid,
}

/// Trimmed job summary returned alongside a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub company_name: String,
    pub job_title: String,
}

impl From<&JobApplication> for JobSummary {
    fn from(job: &JobApplication) -> Self {
        Self {
            id: job.id,
            company_name: job.company_name.clone(),
            job_title: job.job_title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub message: String,
    pub cached: bool,
    #[serde(rename = "match")]
    pub match_result: MatchResult,
    pub job: JobSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchLookupResponse {
    #[serde(rename = "match")]
    pub match_result: MatchResult,
    pub job: JobSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfExtractInfo {
    pub file_name: String,
    pub file_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfExtractResponse {
    pub success: bool,
    pub text: String,
    pub info: PdfExtractInfo,
}
