use thiserror::Error;

pub mod input;

pub use input::DocumentInput;
// Re-export domain types for convenience
pub use transcript_core::{
    BackendError, EnrollmentScan, LoadRow, LoadTable, StatusVerdict, TextBackend,
};
pub use transcript_parsing::{Assessment, ParsingConfig, ParsingError, TranscriptParser};

use transcript_pdftotext::PdftotextBackend;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("conversion error: {0}")]
    Backend(#[from] BackendError),
    #[error("transcript format error: {0}")]
    Parsing(#[from] ParsingError),
    #[error("invalid input: {0}")]
    InvalidInputType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// The converter was missing or could not convert the document.
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Self::Backend(_))
    }

    /// The text did not have the expected transcript shape.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Parsing(_))
    }
}

/// Converts a document with a [`TextBackend`] and runs a [`TranscriptParser`]
/// over the text.
///
/// Holds only configuration. Each call converts the document afresh; nothing
/// is cached between calls.
pub struct TranscriptReader {
    backend: Box<dyn TextBackend>,
    parser: TranscriptParser,
}

impl Default for TranscriptReader {
    fn default() -> Self {
        Self::new(Box::new(PdftotextBackend::default()), TranscriptParser::new())
    }
}

impl TranscriptReader {
    pub fn new(backend: Box<dyn TextBackend>, parser: TranscriptParser) -> Self {
        Self { backend, parser }
    }

    pub fn parser(&self) -> &TranscriptParser {
        &self.parser
    }

    /// Full layout-preserved text of the document.
    pub fn text(&self, input: impl Into<DocumentInput>) -> Result<String, IngestError> {
        let document = input.into().materialize()?;
        let text = self.backend.extract_text(document.path())?;
        Ok(text)
    }

    /// The course-load table.
    pub fn load_table(&self, input: impl Into<DocumentInput>) -> Result<LoadTable, IngestError> {
        let text = self.text(input)?;
        Ok(self.parser.load_table(&text)?)
    }

    /// Enrollment-keyword lines and their periods.
    pub fn enrollment(
        &self,
        input: impl Into<DocumentInput>,
    ) -> Result<EnrollmentScan, IngestError> {
        let text = self.text(input)?;
        Ok(self.parser.scan_enrollment(&text))
    }

    /// Course-load table, enrollment scan and verdict from one conversion.
    pub fn assess(&self, input: impl Into<DocumentInput>) -> Result<Assessment, IngestError> {
        let text = self.text(input)?;
        Ok(self.parser.assess(&text)?)
    }

    /// Whether the last hour value on the pending line is zero.
    pub fn has_completed_load(
        &self,
        input: impl Into<DocumentInput>,
    ) -> Result<bool, IngestError> {
        let text = self.text(input)?;
        Ok(self.parser.has_completed_load(&text)?)
    }

    /// Whether the enrollment keyword appears anywhere in the document.
    pub fn is_enrolled(&self, input: impl Into<DocumentInput>) -> Result<bool, IngestError> {
        let text = self.text(input)?;
        Ok(self.parser.is_enrolled(&text))
    }
}

/// Read the course-load table of a transcript with `pdftotext` and the
/// default vocabulary.
pub fn extract_load_table(input: impl Into<DocumentInput>) -> Result<LoadTable, IngestError> {
    TranscriptReader::default().load_table(input)
}

/// Scan a transcript for enrollment lines with `pdftotext` and the default
/// vocabulary.
pub fn scan_enrollment(input: impl Into<DocumentInput>) -> Result<EnrollmentScan, IngestError> {
    TranscriptReader::default().enrollment(input)
}

/// Whether nothing is pending on the transcript's `Pendente` line.
pub fn has_completed_load(input: impl Into<DocumentInput>) -> Result<bool, IngestError> {
    TranscriptReader::default().has_completed_load(input)
}

/// Whether the transcript mentions `MATRICULADO` anywhere.
pub fn is_enrolled(input: impl Into<DocumentInput>) -> Result<bool, IngestError> {
    TranscriptReader::default().is_enrolled(input)
}
