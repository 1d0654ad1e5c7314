use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{
        BoardResponse, CreateJobPayload, JobListQuery, JobListResponse, JobResponse,
        StatsResponse, UpdateJobPayload,
    },
    error::{Error, Result},
    middleware::auth::AuthUser,
    models::job_application::{invalid_status_message, is_valid_status},
    AppState,
};

fn check_status(status: Option<&str>) -> Result<()> {
    match status {
        Some(s) if !is_valid_status(s) => Err(Error::BadRequest(invalid_status_message())),
        _ => Ok(()),
    }
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job application created", body = Json<JobResponse>),
        (status = 400, description = "Missing required fields or invalid status")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    check_status(payload.status.as_deref())?;
    let job = state.job_service.create(auth.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(JobResponse {
            message: Some("Job application created successfully".to_string()),
            job,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(("status" = Option<String>, Query, description = "Filter by status")),
    responses((status = 200, description = "Own job applications", body = Json<JobListResponse>))
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list(auth.id, query.status.as_deref()).await?;
    Ok(Json(JobListResponse {
        count: jobs.len(),
        jobs,
    }))
}

#[utoipa::path(
    get,
    path = "/api/jobs/board",
    responses((status = 200, description = "Jobs grouped by status", body = Json<BoardResponse>))
)]
#[axum::debug_handler]
pub async fn board(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let board = state.job_service.board(auth.id).await?;
    Ok(Json(BoardResponse { board }))
}

#[utoipa::path(
    get,
    path = "/api/jobs/stats",
    responses((status = 200, description = "Aggregate counts", body = Json<StatsResponse>))
)]
#[axum::debug_handler]
pub async fn stats(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let stats = state.job_service.stats(auth.id).await?;
    Ok(Json(StatsResponse { stats }))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job application ID")),
    responses(
        (status = 200, description = "Job application", body = Json<JobResponse>),
        (status = 404, description = "Not found or not owned")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state
        .job_service
        .get(id, auth.id)
        .await?
        .ok_or_else(|| Error::NotFound("Job application not found.".to_string()))?;
    Ok(Json(JobResponse { message: None, job }))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job application ID")),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job application updated", body = Json<JobResponse>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Not found or not owned")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    check_status(payload.status.as_deref())?;
    let job = state
        .job_service
        .update(id, auth.id, payload)
        .await?
        .ok_or_else(|| Error::NotFound("Job application not found.".to_string()))?;
    Ok(Json(JobResponse {
        message: Some("Job application updated successfully".to_string()),
        job,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job application ID")),
    responses(
        (status = 200, description = "Job application deleted", body = Json<JobResponse>),
        (status = 404, description = "Not found or not owned")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state
        .job_service
        .delete(id, auth.id)
        .await?
        .ok_or_else(|| Error::NotFound("Job application not found.".to_string()))?;
    Ok(Json(JobResponse {
        message: Some("Job application deleted successfully".to_string()),
        job,
    }))
}
