use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_UPLOAD_LIMIT_MB: usize = 5;

/// Framework-level body cap, as a multiple of the upload limit. Uploads between
/// the two limits are read fully and rejected by the upload handler's size check.
pub const BODY_LIMIT_FACTOR: usize = 4;

/// Application configuration loaded from environment variables.
/// Startup aborts if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub upload_limit_mb: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            upload_limit_mb: parse_upload_limit(std::env::var("UPLOAD_LIMIT_MB").ok())?,
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "5000".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

fn parse_upload_limit(raw: Option<String>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_UPLOAD_LIMIT_MB);
    };
    let mb = raw
        .trim()
        .parse::<usize>()
        .context("UPLOAD_LIMIT_MB must be a positive integer")?;
    anyhow::ensure!(mb > 0, "UPLOAD_LIMIT_MB must be greater than zero");
    // The body cap is derived from this in bytes; it must not overflow.
    mb.checked_mul(1024 * 1024 * BODY_LIMIT_FACTOR)
        .context("UPLOAD_LIMIT_MB is too large")?;
    Ok(mb)
}
