use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored resume. Rows are written once and never updated.
#[derive(Debug, Clone)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub filename: String,
    pub skills: Vec<String>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ResumeRecord {
    /// Builds a record with a fresh id, stamped now.
    pub fn new(filename: String, skills: Vec<String>, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            skills,
            text,
            timestamp: Utc::now(),
        }
    }
}
