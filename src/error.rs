use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("AI upstream error: {0}")]
    Upstream(String),

    #[error("AI response shape error: {0}")]
    InvalidResponseShape(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

const GENERIC_AI_MESSAGE: &str = "Failed to analyze resume-job match.";
const GENERIC_MESSAGE: &str = "An unexpected error occurred";

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, detail) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            Error::Upstream(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_AI_MESSAGE.to_string(),
                Some(detail),
            ),
            Error::InvalidResponseShape(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_AI_MESSAGE.to_string(),
                Some(detail),
            ),
            Error::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_MESSAGE.to_string(),
                Some(err.to_string()),
            ),
            Error::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_MESSAGE.to_string(),
                Some(msg),
            ),
            Error::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_MESSAGE.to_string(),
                Some(err.to_string()),
            ),
            Error::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_MESSAGE.to_string(),
                Some(msg),
            ),
            Error::Anyhow(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_MESSAGE.to_string(),
                Some(err.to_string()),
            ),
        };

        if let Some(ref detail) = detail {
            tracing::error!(status = %status, detail = %detail, "request failed");
        }

        // Internal detail strings are only exposed outside production.
        let body = match detail.filter(|_| crate::config::is_development()) {
            Some(d) => Json(json!({ "error": error_message, "details": d })),
            None => Json(json!({ "error": error_message })),
        };
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
