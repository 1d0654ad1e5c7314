use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::user::User;

const USER_COLUMNS: &str =
    "id, email, password_hash, full_name, resume_text, created_at, updated_at";

/// Credential store: persists user records. Email uniqueness is enforced by
/// the unique index; callers pre-check for a friendlier error.
#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        resume_text: Option<&str>,
    ) -> Result<User> {
        let query = format!(
            "INSERT INTO users (email, password_hash, full_name, resume_text)
             VALUES ($1, $2, $3, $4)
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password_hash)
            .bind(full_name)
            .bind(resume_text)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn update_resume(&self, id: Uuid, resume_text: &str) -> Result<User> {
        let query = format!(
            "UPDATE users
             SET resume_text = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(resume_text)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }
}
