use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub company_name: String,
    pub email: String,
    pub industry: String,
    pub location: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub logo: Option<String>,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
