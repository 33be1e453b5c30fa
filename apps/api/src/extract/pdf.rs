use std::panic;

use tracing::debug;

use super::{join_non_empty, ExtractError};

/// Extracts text page by page and joins the non-empty pages.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractError::Failure("PDF parser aborted on malformed input".to_string()))?
        .map_err(|e| ExtractError::Failure(e.to_string()))?;

    debug!("PDF parsed: {} page(s)", pages.len());
    Ok(join_non_empty(pages))
}
