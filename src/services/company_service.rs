use crate::dto::company_dto::{CreateCompanyPayload, UpdateCompanyPayload};
use crate::error::{Error, Result};
use crate::models::company::CompanyProfile;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, account_id: Uuid, payload: CreateCompanyPayload) -> Result<CompanyProfile> {
        let company = sqlx::query_as::<_, CompanyProfile>(
            r#"
            INSERT INTO company_profiles (account_id, company_name, email, industry, location, description, website, linkedin)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(account_id)
        .bind(payload.company_name.trim())
        .bind(payload.email.trim().to_lowercase())
        .bind(payload.industry)
        .bind(payload.location)
        .bind(payload.description)
        .bind(payload.website)
        .bind(payload.linkedin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Error::Conflict("Company profile already exists".to_string())
            }
            other => other.into(),
        })?;

        Ok(company)
    }

    pub async fn get_by_account(&self, account_id: Uuid) -> Result<Option<CompanyProfile>> {
        let company =
            sqlx::query_as::<_, CompanyProfile>("SELECT * FROM company_profiles WHERE account_id = $1")
                .bind(account_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(company)
    }

    /// Company-side endpoints require the caller to own a company profile.
    /// Absence here is an entitlement failure, not a missing resource.
    pub async fn require_for_account(&self, account_id: Uuid) -> Result<CompanyProfile> {
        self.get_by_account(account_id).await?.ok_or_else(|| {
            Error::Forbidden("This action requires a company profile".to_string())
        })
    }

    pub async fn list_all(&self) -> Result<Vec<CompanyProfile>> {
        let companies = sqlx::query_as::<_, CompanyProfile>(
            "SELECT * FROM company_profiles ORDER BY company_name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(companies)
    }

    pub async fn update(&self, account_id: Uuid, payload: UpdateCompanyPayload) -> Result<CompanyProfile> {
        let company = sqlx::query_as::<_, CompanyProfile>(
            r#"
            UPDATE company_profiles
            SET
                company_name = COALESCE($2, company_name),
                industry = COALESCE($3, industry),
                location = COALESCE($4, location),
                description = COALESCE($5, description),
                website = COALESCE($6, website),
                linkedin = COALESCE($7, linkedin),
                updated_at = NOW()
            WHERE account_id = $1
            RETURNING *
            "#,
        )
        .bind(account_id)
        .bind(payload.company_name)
        .bind(payload.industry)
        .bind(payload.location)
        .bind(payload.description)
        .bind(payload.website)
        .bind(payload.linkedin)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Company profile not found".to_string()))?;

        Ok(company)
    }

    pub async fn set_logo(&self, account_id: Uuid, url: &str) -> Result<CompanyProfile> {
        let company = sqlx::query_as::<_, CompanyProfile>(
            "UPDATE company_profiles SET logo = $2, updated_at = NOW() WHERE account_id = $1 RETURNING *",
        )
        .bind(account_id)
        .bind(url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Company profile not found".to_string()))?;
        Ok(company)
    }

    pub async fn set_cover(&self, account_id: Uuid, url: &str) -> Result<CompanyProfile> {
        let company = sqlx::query_as::<_, CompanyProfile>(
            "UPDATE company_profiles SET cover_image = $2, updated_at = NOW() WHERE account_id = $1 RETURNING *",
        )
        .bind(account_id)
        .bind(url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Company profile not found".to_string()))?;
        Ok(company)
    }
}
