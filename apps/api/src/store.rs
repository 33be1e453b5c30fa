//! Persistence of resume records.
//!
//! Carried in `AppState` as `Arc<dyn RecordStore>` so handlers never see the pool.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts `record` and returns its id. Records are append-only.
    async fn insert(&self, record: &ResumeRecord) -> Result<Uuid, AppError>;
}

pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, record: &ResumeRecord) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO resumes (id, filename, skills, "text", "timestamp")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(record.id)
        .bind(&record.filename)
        .bind(&record.skills)
        // PostgreSQL TEXT rejects NUL bytes, which some PDFs carry.
        .bind(record.text.replace('\0', ""))
        .bind(record.timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
