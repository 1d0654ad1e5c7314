pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    ai_service::{AiService, ResumeScorer},
    analysis_service::AnalysisService,
    auth_service::AuthService,
    job_service::JobService,
    match_service::MatchService,
    user_service::UserService,
};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth_service: AuthService,
    pub job_service: JobService,
    pub analysis_service: AnalysisService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");

        let scorer: Arc<dyn ResumeScorer> = Arc::new(AiService::new(
            config.groq_api_key.clone(),
            config.groq_api_url.clone(),
            config.groq_model.clone(),
            http_client,
        ));
        Self::with_scorer(pool, scorer)
    }

    /// Wires the state around an explicit scorer; tests use this to inject
    /// a mock instead of the live AI client.
    pub fn with_scorer(pool: PgPool, scorer: Arc<dyn ResumeScorer>) -> Self {
        let config = crate::config::get_config();

        let user_service = UserService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let match_service = MatchService::new(pool.clone());

        let auth_service = AuthService::new(user_service.clone(), config.jwt_secret.clone());
        let analysis_service = AnalysisService::new(
            job_service.clone(),
            user_service,
            match_service,
            scorer,
        );

        Self {
            pool,
            auth_service,
            job_service,
            analysis_service,
        }
    }
}
