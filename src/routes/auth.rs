use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::auth_dto::{
        AuthResponse, LoginPayload, ProfileResponse, RegisterPayload, ResumeUpdateResponse,
        UpdateResumePayload,
    },
    error::{Error, Result},
    middleware::auth::AuthUser,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "User registered", body = Json<AuthResponse>),
        (status = 400, description = "Duplicate email or invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let (user, token) = state.auth_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: user.into(),
            token,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login successful", body = Json<AuthResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let (user, token) = state.auth_service.login(payload).await?;
    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user: user.into(),
        token,
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Own profile", body = Json<ProfileResponse>),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.profile(auth.id).await?;
    Ok(Json(ProfileResponse { user: user.into() }))
}

#[utoipa::path(
    put,
    path = "/api/auth/resume",
    request_body = UpdateResumePayload,
    responses(
        (status = 200, description = "Resume updated", body = Json<ResumeUpdateResponse>),
        (status = 400, description = "Missing resume text")
    )
)]
#[axum::debug_handler]
pub async fn update_resume(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UpdateResumePayload>,
) -> Result<impl IntoResponse> {
    let resume_text = payload
        .resume_text
        .ok_or_else(|| Error::BadRequest("Resume text is required.".to_string()))?;
    let user = state.auth_service.update_resume(auth.id, &resume_text).await?;
    Ok(Json(ResumeUpdateResponse {
        message: "Resume updated successfully".to_string(),
        user: user.into(),
    }))
}
