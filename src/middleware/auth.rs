use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::utils::token::verify_token;

/// Identity extracted from a verified bearer token; inserted into request
/// extensions for downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// Fails closed: missing, malformed, or expired tokens are rejected before
/// any handler logic runs.
pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    let Some(auth_header) = req.headers().get(axum::http::header::AUTHORIZATION) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"missing_authorization"})),
        )
            .into_response();
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"bad_authorization"})),
        )
            .into_response();
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"unsupported_scheme"})),
        )
            .into_response();
    };

    let config = crate::config::get_config();
    match verify_token(token, &config.jwt_secret) {
        Ok(claims) => {
            let Ok(user_id) = claims.user_id() else {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error":"invalid_token"})),
                )
                    .into_response();
            };
            req.extensions_mut().insert(AuthUser {
                id: user_id,
                email: claims.email,
            });
            next.run(req).await
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error":"invalid_token"})),
        )
            .into_response(),
    }
}
