pub mod job_application;
pub mod match_result;
pub mod user;
