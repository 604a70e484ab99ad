use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use transcript_core::{BackendError, TextBackend};

/// Program name used when none is configured.
pub const DEFAULT_PROGRAM: &str = "pdftotext";

/// [`TextBackend`] that shells out to poppler's `pdftotext`.
///
/// This crate is the only place an external process is spawned. The
/// converter runs as `<program> -layout <path> -` so that column alignment
/// in the course-load table survives as whitespace in the text. The call
/// blocks until the process exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct PdftotextBackend {
    program: String,
}

impl Default for PdftotextBackend {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

impl PdftotextBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different converter executable (name looked up on `PATH`, or a path).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TextBackend for PdftotextBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        tracing::debug!(program = %self.program, path = %path.display(), "running converter");

        let output = Command::new(&self.program)
            .arg("-layout")
            .arg(path)
            .arg("-")
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => BackendError::ToolUnavailable(self.program.clone()),
                _ => BackendError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(status = %output.status, stderr = %stderr, "converter failed");
            return Err(BackendError::ConversionFailed(stderr));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(bytes = text.len(), "converter finished");
        Ok(text)
    }
}
