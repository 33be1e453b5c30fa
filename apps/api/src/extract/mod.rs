//! Text extraction from uploaded resumes.
//!
//! Dispatches on the filename extension. PDF text is joined page by page,
//! DOCX text paragraph by paragraph, both with `\n` separators and with empty
//! pages/paragraphs skipped. Nothing here touches the network or the database.

mod docx;
mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format. Only PDF and DOCX files are allowed.")]
    UnsupportedFormat,

    #[error("Error extracting text: {0}")]
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive match on the filename suffix.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

/// Extracts plain text from `bytes`, picking the parser from `filename`.
/// Unsupported extensions fail before any parsing is attempted.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_filename(filename).ok_or(ExtractError::UnsupportedFormat)?;

    match format {
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
    }
}

/// Joins the non-blank pieces with newlines.
fn join_non_empty<I>(pieces: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pieces
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
