use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("converter '{0}' not found on this system")]
    ToolUnavailable(String),
    #[error("failed to convert document to text: {0}")]
    ConversionFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for document-to-text conversion backends.
///
/// Implementors turn a document on disk into its layout-preserving text
/// rendering; locating sections and reading the course-load rows lives in
/// `transcript_parsing`.
pub trait TextBackend: Send + Sync {
    /// Convert the document at `path` into its full text.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
