use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: JsonValue,
    pub location: String,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
    pub salary_type: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub remote: bool,
    pub application_deadline: Option<NaiveDate>,
    pub benefits: JsonValue,
    pub extra_details: Option<String>,
    /// Company public info as it was when the job was posted. Written once at
    /// insert and never refreshed, so applicants keep seeing what they applied
    /// against even after the company edits its profile.
    pub company_snapshot: JsonValue,
    pub posted_at: DateTime<Utc>,
}
