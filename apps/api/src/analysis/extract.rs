//! PDF text extraction.
//!
//! `TextExtractor` is the seam between the handler and the extraction library.
//! `AppState` holds an `Arc<dyn TextExtractor>`; tests swap in a stub.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF read error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("extraction task failed: {0}")]
    Task(String),
}

/// Returns the text of each page of a stored document, in page order.
pub trait TextExtractor: Send + Sync {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

/// `pdf-extract` backed extractor used in production.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        Ok(pdf_extract::extract_text_by_pages(path)?)
    }
}

/// Joins page texts with newlines, skipping pages that yielded no text.
pub fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs the extractor on a blocking worker and assembles the résumé text.
/// A panic inside the extraction library is reported as an `ExtractError`.
pub async fn extract_resume_text(
    extractor: std::sync::Arc<dyn TextExtractor>,
    path: PathBuf,
) -> Result<String, ExtractError> {
    let pages = tokio::task::spawn_blocking(move || extractor.extract_pages(&path))
        .await
        .map_err(|e| ExtractError::Task(e.to_string()))??;
    Ok(join_pages(&pages))
}
