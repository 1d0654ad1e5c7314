use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::job_application::JobApplication;
use crate::models::match_result::MatchResult;
use crate::services::ai_service::ResumeScorer;
use crate::services::job_service::JobService;
use crate::services::match_service::MatchService;
use crate::services::user_service::UserService;

pub const RESUME_REQUIRED_MESSAGE: &str =
    "Please add your resume text before analyzing matches.";
pub const JOB_NOT_FOUND_MESSAGE: &str = "Job application not found.";
pub const NO_MATCH_MESSAGE: &str = "No match analysis found for this job.";

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub match_result: MatchResult,
    pub job: JobApplication,
    pub cached: bool,
}

/// Orchestrates resume-to-job scoring: serve a cached result when one exists,
/// otherwise call the scorer once and write through to the match store.
///
/// Two concurrent analyze calls for the same job id may both reach the scorer
/// before either writes; the upsert makes the last write win. This race is
/// accepted rather than guarded.
#[derive(Clone)]
pub struct AnalysisService {
    jobs: JobService,
    users: UserService,
    matches: MatchService,
    scorer: Arc<dyn ResumeScorer>,
}

impl AnalysisService {
    pub fn new(
        jobs: JobService,
        users: UserService,
        matches: MatchService,
        scorer: Arc<dyn ResumeScorer>,
    ) -> Self {
        Self {
            jobs,
            users,
            matches,
            scorer,
        }
    }

    /// Both preconditions checked before any scorer call or write: the job
    /// must be owned by the caller, and the caller must have resume text.
    async fn load_context(
        &self,
        owner_id: Uuid,
        job_application_id: Uuid,
    ) -> Result<(JobApplication, String)> {
        let job = self
            .jobs
            .get(job_application_id, owner_id)
            .await?
            .ok_or_else(|| Error::NotFound(JOB_NOT_FOUND_MESSAGE.to_string()))?;

        let user = self
            .users
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found.".to_string()))?;
        let resume = user
            .resume()
            .map(str::to_string)
            .ok_or_else(|| Error::BadRequest(RESUME_REQUIRED_MESSAGE.to_string()))?;

        Ok((job, resume))
    }

    async fn score_and_store(
        &self,
        job: &JobApplication,
        resume: &str,
    ) -> Result<MatchResult> {
        let description = job.description_for_scoring();
        let report = self
            .scorer
            .score(resume, &description, &job.job_title, &job.company_name)
            .await?;
        self.matches.upsert(job.id, &report).await
    }

    /// Cache-or-compute. Exactly one upsert on a miss, zero writes and zero
    /// scorer calls on a hit.
    pub async fn analyze(
        &self,
        owner_id: Uuid,
        job_application_id: Uuid,
    ) -> Result<AnalysisOutcome> {
        let (job, resume) = self.load_context(owner_id, job_application_id).await?;

        if let Some(existing) = self.matches.get(job.id).await? {
            tracing::debug!(job_id = %job.id, "match served from cache");
            return Ok(AnalysisOutcome {
                match_result: existing,
                job,
                cached: true,
            });
        }

        tracing::info!(job_id = %job.id, "analyzing resume-job match");
        let match_result = self.score_and_store(&job, &resume).await?;
        Ok(AnalysisOutcome {
            match_result,
            job,
            cached: false,
        })
    }

    /// Forced recompute: any existing result is deleted first, so a fresh
    /// scorer call happens every time.
    pub async fn reanalyze(
        &self,
        owner_id: Uuid,
        job_application_id: Uuid,
    ) -> Result<AnalysisOutcome> {
        let (job, resume) = self.load_context(owner_id, job_application_id).await?;

        self.matches.delete(job.id).await?;

        tracing::info!(job_id = %job.id, "re-analyzing resume-job match");
        let match_result = self.score_and_store(&job, &resume).await?;
        Ok(AnalysisOutcome {
            match_result,
            job,
            cached: false,
        })
    }

    /// Read-only lookup. "No analysis yet" is distinct from "job not found".
    pub async fn cached(
        &self,
        owner_id: Uuid,
        job_application_id: Uuid,
    ) -> Result<AnalysisOutcome> {
        let job = self
            .jobs
            .get(job_application_id, owner_id)
            .await?
            .ok_or_else(|| Error::NotFound(JOB_NOT_FOUND_MESSAGE.to_string()))?;

        let match_result = self
            .matches
            .get(job.id)
            .await?
            .ok_or_else(|| Error::NotFound(NO_MATCH_MESSAGE.to_string()))?;

        Ok(AnalysisOutcome {
            match_result,
            job,
            cached: true,
        })
    }
}
