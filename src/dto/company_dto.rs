use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::company::CompanyProfile;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1))]
    pub company_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub industry: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1))]
    pub company_name: Option<String>,
    #[validate(length(min = 1))]
    pub industry: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: Uuid,
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
}

impl From<CompanyProfile> for CompanyResponse {
    fn from(value: CompanyProfile) -> Self {
        Self {
            id: value.id,
            company_name: value.company_name,
            email: value.email,
            industry: value.industry,
            location: value.location,
            description: value.description,
            website: value.website,
            linkedin: value.linkedin,
            logo: value.logo,
            cover_image: value.cover_image,
            created_at: value.created_at,
        }
    }
}
