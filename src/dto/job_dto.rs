use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::Validate;

use crate::models::job::Job;
use crate::services::job_service::JobList;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[validate(length(min = 1))]
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub salary_type: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    #[serde(default)]
    pub remote: bool,
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub extra_details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub salary_type: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub remote: bool,
    pub application_deadline: Option<NaiveDate>,
    pub benefits: Vec<String>,
    pub extra_details: Option<String>,
    /// Company info as captured when the job was posted.
    pub company: JsonValue,
    pub posted_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(value: Job) -> Self {
        Self {
            id: value.id,
            company_id: value.company_id,
            title: value.title,
            description: value.description,
            requirements: serde_json::from_value(value.requirements).unwrap_or_default(),
            location: value.location,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            salary_type: value.salary_type,
            employment_type: value.employment_type,
            experience_level: value.experience_level,
            remote: value.remote,
            application_deadline: value.application_deadline,
            benefits: serde_json::from_value(value.benefits).unwrap_or_default(),
            extra_details: value.extra_details,
            company: value.company_snapshot,
            posted_at: value.posted_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub search: Option<String>,
    pub employment_type: Option<String>,
    pub remote: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub items: Vec<JobResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl From<JobList> for JobListResponse {
    fn from(value: JobList) -> Self {
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
        }
    }
}
