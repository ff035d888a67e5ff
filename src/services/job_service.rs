use crate::dto::job_dto::{CreateJobPayload, JobListQuery};
use crate::error::Result;
use crate::models::company::CompanyProfile;
use crate::models::job::Job;
use crate::utils::skills;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

pub struct JobList {
    pub items: Vec<Job>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a posting together with a point-in-time snapshot of the owning
    /// company's public info. The snapshot column is never touched again, so a
    /// later profile edit cannot change what applicants saw at posting time.
    pub async fn create(&self, company: &CompanyProfile, payload: CreateJobPayload) -> Result<Job> {
        let snapshot = json!({
            "company_name": company.company_name,
            "industry": company.industry,
            "description": company.description,
            "logo": company.logo,
        });

        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                company_id, title, description, requirements, location,
                salary_min, salary_max, salary_type, employment_type, experience_level,
                remote, application_deadline, benefits, extra_details, company_snapshot
            ) VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15
            )
            RETURNING *
            "#,
        )
        .bind(company.id)
        .bind(payload.title)
        .bind(payload.description)
        .bind(skills::to_canonical(&payload.requirements))
        .bind(payload.location)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .bind(payload.salary_type)
        .bind(payload.employment_type)
        .bind(payload.experience_level)
        .bind(payload.remote)
        .bind(payload.application_deadline)
        .bind(skills::to_canonical(&payload.benefits))
        .bind(payload.extra_details)
        .bind(snapshot)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn list(&self, query: JobListQuery) -> Result<JobList> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;

        let mut filters = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(employment_type) = query.employment_type {
            filters.push(format!("employment_type = ${}", args.len() + 1));
            args.push(employment_type);
        }
        if let Some(search) = query.search {
            let first = args.len() + 1;
            let second = first + 1;
            filters.push(format!(
                "(title ILIKE ${} OR location ILIKE ${})",
                first, second
            ));
            args.push(format!("%{}%", search.clone()));
            args.push(format!("%{}%", search));
        }
        if let Some(remote) = query.remote {
            // Parsed bool, safe to inline.
            filters.push(format!("remote = {}", remote));
        }

        let where_clause = if filters.is_empty() {
            "".to_string()
        } else {
            format!("WHERE {}", filters.join(" AND "))
        };

        let items_query = format!(
            "SELECT * FROM jobs {} ORDER BY posted_at DESC LIMIT ${} OFFSET ${}",
            where_clause,
            args.len() + 1,
            args.len() + 2
        );
        let total_query = format!("SELECT COUNT(*) FROM jobs {}", where_clause);

        let mut items_statement = sqlx::query_as::<_, Job>(&items_query);
        for value in &args {
            items_statement = items_statement.bind(value);
        }
        items_statement = items_statement.bind(per_page).bind(offset);
        let items = items_statement.fetch_all(&self.pool).await?;

        let mut total_statement = sqlx::query_scalar::<_, i64>(&total_query);
        for value in &args {
            total_statement = total_statement.bind(value);
        }
        let total = total_statement.fetch_one(&self.pool).await?;

        let total_pages = ((total as f64) / (per_page as f64)).ceil() as i64;

        Ok(JobList {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(job)
    }
}
