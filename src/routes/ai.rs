use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;

use crate::{
    dto::ai_dto::{AnalyzePayload, AnalyzeResponse, MatchLookupResponse},
    error::Result,
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/ai/analyze",
    request_body = AnalyzePayload,
    responses(
        (status = 200, description = "Match analysis (cached or fresh)", body = Json<AnalyzeResponse>),
        (status = 400, description = "No resume text on file"),
        (status = 404, description = "Job application not found")
    )
)]
#[axum::debug_handler]
pub async fn analyze(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<AnalyzePayload>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .analysis_service
        .analyze(auth.id, payload.job_application_id)
        .await?;
    let message = if outcome.cached {
        "Match analysis retrieved from cache"
    } else {
        "Match analysis completed successfully"
    };
    Ok(Json(AnalyzeResponse {
        message: message.to_string(),
        cached: outcome.cached,
        job: (&outcome.job).into(),
        match_result: outcome.match_result,
    }))
}

#[utoipa::path(
    post,
    path = "/api/ai/reanalyze",
    request_body = AnalyzePayload,
    responses(
        (status = 200, description = "Fresh match analysis", body = Json<AnalyzeResponse>),
        (status = 400, description = "No resume text on file"),
        (status = 404, description = "Job application not found")
    )
)]
#[axum::debug_handler]
pub async fn reanalyze(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<AnalyzePayload>,
) -> Result<impl IntoResponse> {
    let outcome = state
        .analysis_service
        .reanalyze(auth.id, payload.job_application_id)
        .await?;
    Ok(Json(AnalyzeResponse {
        message: "Match re-analysis completed successfully".to_string(),
        cached: false,
        job: (&outcome.job).into(),
        match_result: outcome.match_result,
    }))
}

#[utoipa::path(
    get,
    path = "/api/ai/match/{job_id}",
    params(("job_id" = Uuid, Path, description = "Job application ID")),
    responses(
        (status = 200, description = "Cached match analysis", body = Json<MatchLookupResponse>),
        (status = 404, description = "Job not found or no analysis yet")
    )
)]
#[axum::debug_handler]
pub async fn get_match(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let outcome = state.analysis_service.cached(auth.id, job_id).await?;
    Ok(Json(MatchLookupResponse {
        job: (&outcome.job).into(),
        match_result: outcome.match_result,
    }))
}
