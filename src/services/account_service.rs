use crate::dto::auth_dto::{SignupPayload, UpdateProfilePayload};
use crate::error::{Error, Result};
use crate::models::account::Account;
use crate::utils::{crypto, skills};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: SignupPayload) -> Result<Account> {
        let password_hash = crypto::hash_password(&payload.password)
            .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, password_hash, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(payload.email.trim().to_lowercase())
        .bind(password_hash)
        .bind(payload.name.trim())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Error::Conflict("An account with this email already exists".to_string())
            }
            other => other.into(),
        })?;

        Ok(account)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
            .bind(email.trim().to_lowercase())
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(account)
    }

    pub async fn update_profile(&self, id: Uuid, payload: UpdateProfilePayload) -> Result<Account> {
        // Write boundary always persists the canonical array shape.
        let skills_value = payload.skills.as_ref().map(|s| skills::to_canonical(s));

        let account = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET
                name = COALESCE($2, name),
                skills = COALESCE($3, skills),
                experience = COALESCE($4, experience),
                education = COALESCE($5, education),
                location = COALESCE($6, location),
                phone = COALESCE($7, phone),
                linkedin = COALESCE($8, linkedin),
                portfolio = COALESCE($9, portfolio),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.name)
        .bind(skills_value)
        .bind(payload.experience)
        .bind(payload.education)
        .bind(payload.location)
        .bind(payload.phone)
        .bind(payload.linkedin)
        .bind(payload.portfolio)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn set_profile_picture(&self, id: Uuid, url: &str) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            "UPDATE accounts SET profile_picture = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(url)
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn set_resume(&self, id: Uuid, url: &str) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            "UPDATE accounts SET resume = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(url)
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }
}
