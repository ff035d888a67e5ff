use crate::error::Result;
use crate::models::message::{Message, ThreadRow};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, application_id: Uuid, sender_id: Uuid, text: &str) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (application_id, sender_id, text)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(application_id)
        .bind(sender_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn list_for_application(&self, application_id: Uuid) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE application_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(application_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Marks everything the reader has not sent as read. Re-running on an
    /// already-read thread matches zero rows and is a no-op.
    pub async fn mark_read(&self, application_id: Uuid, reader_id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET is_read = TRUE
            WHERE application_id = $1 AND sender_id <> $2 AND is_read = FALSE
            "#,
        )
        .bind(application_id)
        .bind(reader_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Unread messages addressed to this account across every application it
    /// is a party to.
    pub async fn unread_total(&self, account_id: Uuid) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM messages m
            JOIN applications a ON a.id = m.application_id
            JOIN jobs j ON j.id = a.job_id
            JOIN company_profiles c ON c.id = j.company_id
            WHERE (a.applicant_id = $1 OR c.account_id = $1)
              AND m.sender_id <> $1
              AND m.is_read = FALSE
            "#,
        )
        .bind(account_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    /// One derived thread per application the account is a party to, most
    /// recent conversation first, applications with no messages last.
    pub async fn list_threads(&self, account_id: Uuid) -> Result<Vec<ThreadRow>> {
        let threads = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT
                a.id AS application_id,
                j.title AS job_title,
                a.applicant_id,
                acc.name AS applicant_name,
                c.account_id AS company_account_id,
                c.company_name,
                lm.text AS last_message,
                lm.created_at AS last_message_at,
                COALESCE(un.count, 0) AS unread_count
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            JOIN company_profiles c ON c.id = j.company_id
            JOIN accounts acc ON acc.id = a.applicant_id
            LEFT JOIN LATERAL (
                SELECT m.text, m.created_at
                FROM messages m
                WHERE m.application_id = a.id
                ORDER BY m.created_at DESC
                LIMIT 1
            ) lm ON TRUE
            LEFT JOIN LATERAL (
                SELECT COUNT(*) AS count
                FROM messages m
                WHERE m.application_id = a.id
                  AND m.sender_id <> $1
                  AND m.is_read = FALSE
            ) un ON TRUE
            WHERE a.applicant_id = $1 OR c.account_id = $1
            ORDER BY lm.created_at DESC NULLS LAST, a.applied_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(threads)
    }
}
