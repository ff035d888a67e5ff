use crate::error::{Error, Result};
use crate::models::application::{
    Application, ApplicationParties, ApplicationStatus, CompanyApplicantRow, MyApplicationRow,
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn apply(
        &self,
        job_id: Uuid,
        applicant_id: Uuid,
        cover_letter: Option<String>,
    ) -> Result<Application> {
        let job_exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;
        if job_exists.is_none() {
            return Err(Error::NotFound("Job not found".to_string()));
        }

        // The (job, applicant) unique constraint is the real guard; two racing
        // applies both reach the insert and one gets the violation.
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (job_id, applicant_id, cover_letter)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(applicant_id)
        .bind(cover_letter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Error::Conflict("You have already applied to this job".to_string())
            }
            other => other.into(),
        })?;

        Ok(application)
    }

    pub async fn get_parties(&self, application_id: Uuid) -> Result<ApplicationParties> {
        let parties = sqlx::query_as::<_, ApplicationParties>(
            r#"
            SELECT a.applicant_id, c.account_id AS company_account_id
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            JOIN company_profiles c ON c.id = j.company_id
            WHERE a.id = $1
            "#,
        )
        .bind(application_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Application not found".to_string()))?;

        Ok(parties)
    }

    /// 404 when the application does not exist, 403 when it exists but the
    /// caller is neither the applicant nor the owning company.
    pub async fn require_party(
        &self,
        application_id: Uuid,
        account_id: Uuid,
    ) -> Result<ApplicationParties> {
        let parties = self.get_parties(application_id).await?;
        if !parties.includes(account_id) {
            return Err(Error::Forbidden(
                "You are not a party to this application".to_string(),
            ));
        }
        Ok(parties)
    }

    pub async fn list_for_applicant(&self, applicant_id: Uuid) -> Result<Vec<MyApplicationRow>> {
        let rows = sqlx::query_as::<_, MyApplicationRow>(
            r#"
            SELECT
                a.id,
                a.job_id,
                j.title AS job_title,
                j.company_snapshot->>'company_name' AS company_name,
                j.location AS job_location,
                a.status,
                a.cover_letter,
                a.applied_at
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            WHERE a.applicant_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_for_company(&self, company_id: Uuid) -> Result<Vec<CompanyApplicantRow>> {
        let rows = sqlx::query_as::<_, CompanyApplicantRow>(
            r#"
            SELECT
                a.id,
                a.job_id,
                j.title AS job_title,
                a.applicant_id,
                acc.name AS applicant_name,
                acc.email AS applicant_email,
                acc.resume AS applicant_resume,
                a.status,
                a.cover_letter,
                a.applied_at
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            JOIN accounts acc ON acc.id = a.applicant_id
            WHERE j.company_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Moves an application along the fixed pending -> reviewed ->
    /// accepted/rejected sequence. Only the owning company may call this, and
    /// the update is conditioned on the status it validated against so a
    /// concurrent transition cannot slip through.
    pub async fn update_status(
        &self,
        application_id: Uuid,
        caller: Uuid,
        new_status: &str,
    ) -> Result<Application> {
        let Some(target) = ApplicationStatus::parse(new_status) else {
            return Err(Error::BadRequest(format!(
                "Unknown application status: {}",
                new_status
            )));
        };

        let parties = self.get_parties(application_id).await?;
        if caller != parties.company_account_id {
            return Err(Error::Forbidden(
                "Only the posting company can update application status".to_string(),
            ));
        }

        let current_raw =
            sqlx::query_scalar::<_, String>("SELECT status FROM applications WHERE id = $1")
                .bind(application_id)
                .fetch_one(&self.pool)
                .await?;
        let current = ApplicationStatus::parse(&current_raw).ok_or_else(|| {
            Error::Internal(format!("Stored status is invalid: {}", current_raw))
        })?;

        if !current.can_transition_to(target) {
            return Err(Error::BadRequest(format!(
                "Cannot move application from {} to {}",
                current.as_str(),
                target.as_str()
            )));
        }

        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(application_id)
        .bind(current.as_str())
        .bind(target.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::Conflict("Application status changed concurrently".to_string()))?;

        Ok(application)
    }
}
