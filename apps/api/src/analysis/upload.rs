//! Transient résumé storage.
//!
//! An uploaded file lives on disk only for the duration of one request.
//! `StoredUpload` owns that file and removes it when dropped.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// True when `filename` has a `.` and the part after the last one is an allowed extension.
pub fn is_allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// The extension of the final path component, including its leading dot.
/// Returns an empty string when there is none (as for `.bashrc`).
fn original_extension(filename: &str) -> &str {
    let base = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);
    let stem_start = base.len() - base.trim_start_matches('.').len();
    match base[stem_start..].rfind('.') {
        Some(idx) => &base[stem_start + idx..],
        None => "",
    }
}

/// Reduces a name to ASCII alphanumerics, `.`, `_` and `-`, with no leading dots.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// Storage name for an upload: a fresh random id followed by the original extension.
pub fn storage_filename(original_name: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    sanitize_filename(&format!("{id}{}", original_extension(original_name)))
}

/// A file written to the upload directory for the current request.
/// Dropping it deletes the file; a failed delete is logged and otherwise ignored.
#[derive(Debug)]
pub struct StoredUpload {
    path: PathBuf,
}

impl StoredUpload {
    /// Writes `data` under a freshly generated name inside `upload_dir`.
    pub async fn save(
        upload_dir: &Path,
        original_name: &str,
        data: &[u8],
    ) -> Result<Self, std::io::Error> {
        let path = upload_dir.join(storage_filename(original_name));
        // Register the guard before writing so a partial write is also removed.
        let upload = StoredUpload { path };
        tokio::fs::write(&upload.path, data).await?;
        Ok(upload)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoredUpload {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to delete uploaded file {}: {e}",
                self.path.display()
            ),
        }
    }
}
