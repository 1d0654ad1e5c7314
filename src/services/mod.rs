pub mod ai_service;
pub mod analysis_service;
pub mod auth_service;
pub mod job_service;
pub mod match_service;
pub mod user_service;
