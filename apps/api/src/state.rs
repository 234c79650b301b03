use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::extract::TextExtractor;
use crate::analysis::feedback::FeedbackGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at start-up and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Directory holding in-flight uploads. Created at start-up.
    pub upload_dir: PathBuf,
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable feedback backend. Default: LlmClient (Gemini).
    pub feedback: Arc<dyn FeedbackGenerator>,
}
