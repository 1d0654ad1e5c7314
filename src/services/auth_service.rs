use uuid::Uuid;

use crate::dto::auth_dto::{LoginPayload, RegisterPayload};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::services::user_service::UserService;
use crate::utils::{crypto, token};

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Registers and authenticates users and issues bearer tokens.
#[derive(Clone)]
pub struct AuthService {
    users: UserService,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(users: UserService, jwt_secret: String) -> Self {
        Self { users, jwt_secret }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<(User, String)> {
        if self.users.find_by_email(&payload.email).await?.is_some() {
            return Err(Error::BadRequest(
                "User with this email already exists.".to_string(),
            ));
        }

        let password_hash = crypto::hash_password(&payload.password)?;
        let user = self
            .users
            .create(
                &payload.email,
                &password_hash,
                &payload.full_name,
                payload.resume_text.as_deref(),
            )
            .await?;

        let token = token::sign_token(user.id, &user.email, &self.jwt_secret)?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok((user, token))
    }

    /// Unknown email and wrong password produce the same generic error, so
    /// the response leaks nothing about which half failed.
    pub async fn login(&self, payload: LoginPayload) -> Result<(User, String)> {
        let user = self
            .users
            .find_by_email(&payload.email)
            .await?
            .ok_or_else(|| Error::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string()))?;

        if !crypto::verify_password(&payload.password, &user.password_hash)? {
            return Err(Error::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        let token = token::sign_token(user.id, &user.email, &self.jwt_secret)?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok((user, token))
    }

    pub async fn profile(&self, user_id: Uuid) -> Result<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found.".to_string()))
    }

    pub async fn update_resume(&self, user_id: Uuid, resume_text: &str) -> Result<User> {
        let trimmed = resume_text.trim();
        if trimmed.is_empty() {
            return Err(Error::BadRequest("Resume text is required.".to_string()));
        }
        self.users.update_resume(user_id, trimmed).await
    }
}
