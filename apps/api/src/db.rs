use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_RESUMES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS resumes (
        id          UUID PRIMARY KEY,
        filename    TEXT NOT NULL,
        skills      TEXT[] NOT NULL,
        "text"      TEXT NOT NULL,
        "timestamp" TIMESTAMPTZ NOT NULL
    )
"#;

/// Creates a PostgreSQL connection pool and verifies the server answers.
/// Startup must abort if this fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    ping(&pool).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Liveness check.
pub async fn ping(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("PostgreSQL ping failed")?;
    Ok(())
}

/// Creates the `resumes` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_RESUMES_TABLE)
        .execute(pool)
        .await
        .context("Failed to create resumes table")?;
    Ok(())
}
