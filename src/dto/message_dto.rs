use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::message::ThreadRow;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessagePayload {
    #[validate(length(min = 1))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub application_id: Uuid,
    pub job_title: String,
    pub counterpart_id: Uuid,
    pub counterpart_name: String,
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub unread_count: i64,
}

impl ThreadResponse {
    /// The counterpart is whichever of the two parties the viewer is not.
    pub fn for_viewer(row: ThreadRow, viewer: Uuid) -> Self {
        let (counterpart_id, counterpart_name) = if viewer == row.applicant_id {
            (row.company_account_id, row.company_name)
        } else {
            (row.applicant_id, row.applicant_name)
        };
        Self {
            application_id: row.application_id,
            job_title: row.job_title,
            counterpart_id,
            counterpart_name,
            last_message: row.last_message,
            last_message_at: row.last_message_at,
            unread_count: row.unread_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadListResponse {
    pub threads: Vec<ThreadResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadResponse {
    pub marked: u64,
}
