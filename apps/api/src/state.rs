use std::sync::Arc;

use crate::skills::SkillExtractor;
use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable skill backend. Default: `LlmSkillExtractor`.
    pub skills: Arc<dyn SkillExtractor>,
    pub records: Arc<dyn RecordStore>,
    /// Largest accepted upload, in MiB.
    pub upload_limit_mb: usize,
}

impl AppState {
    pub fn upload_limit_bytes(&self) -> usize {
        self.upload_limit_mb * 1024 * 1024
    }
}
