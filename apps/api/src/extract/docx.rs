use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::{join_non_empty, ExtractError};

/// Extracts text paragraph by paragraph and joins the non-empty paragraphs.
/// Only body-level paragraphs count; tables and text boxes are skipped.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Failure(e.to_string()))?;

    let paragraphs = docx.document.children.into_iter().filter_map(|child| match child {
        DocumentChild::Paragraph(p) => Some(paragraph_text(p.children)),
        _ => None,
    });

    Ok(join_non_empty(paragraphs))
}

fn paragraph_text(children: Vec<ParagraphChild>) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(link.children)),
            _ => {}
        }
    }
    text
}
