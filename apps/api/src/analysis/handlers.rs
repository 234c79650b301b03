//! Axum route handler for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::extract::extract_resume_text;
use crate::analysis::prompts::build_prompt;
use crate::analysis::upload::{is_allowed_file, StoredUpload};
use crate::errors::AppError;
use crate::state::AppState;

/// Largest accepted request body: 16 MiB.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// The uploaded résumé file part.
#[derive(Debug)]
pub struct ResumeFile {
    pub filename: String,
    pub data: Bytes,
}

/// The parts of an analyze request this service cares about.
#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub resume: Option<ResumeFile>,
    pub job_description: Option<String>,
}

impl AnalyzeForm {
    /// Reads the multipart stream. Only a part carrying a filename counts as the
    /// résumé file, and only a part without one counts as the job description.
    /// The first occurrence of each wins; other parts are skipped.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let filename = field.file_name().map(str::to_string);

            match (name.as_str(), filename) {
                (RESUME_FIELD, Some(filename)) if form.resume.is_none() => {
                    let data = field.bytes().await?;
                    form.resume = Some(ResumeFile { filename, data });
                }
                (JOB_DESCRIPTION_FIELD, None) if form.job_description.is_none() => {
                    form.job_description = Some(field.text().await?);
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// validate → save → extract → prompt → infer → respond. The stored upload is
/// removed when `upload` drops, on every path after the save succeeded.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    // A body that is not multipart carries neither field.
    let multipart = multipart.map_err(|_| AppError::MissingFields)?;
    let form = AnalyzeForm::read(multipart).await?;

    let (Some(resume), Some(job_description)) = (form.resume, form.job_description) else {
        return Err(AppError::MissingFields);
    };

    if resume.filename.is_empty() || !is_allowed_file(&resume.filename) {
        return Err(AppError::InvalidFileType);
    }

    let upload = StoredUpload::save(&state.upload_dir, &resume.filename, &resume.data).await?;
    info!(
        "Stored upload {} ({} bytes)",
        upload.path().display(),
        resume.data.len()
    );

    let resume_text =
        extract_resume_text(state.extractor.clone(), upload.path().to_path_buf()).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::NoReadableText);
    }
    debug!("Extracted {} chars of resume text", resume_text.len());

    let prompt = build_prompt(&resume_text, &job_description);
    let feedback = state.feedback.generate(&prompt).await?;
    info!("Generated {} chars of feedback", feedback.len());

    drop(upload);

    Ok(Json(FeedbackResponse {
        feedback: feedback.trim().to_string(),
    }))
}
