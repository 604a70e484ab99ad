use thiserror::Error;

pub mod checker;
pub mod config;
pub mod enrollment;
pub mod extractor;
pub mod load_table;
pub mod locator;
pub mod row;
pub mod text_processing;
pub mod verdict;

pub use config::{ParsingConfig, ParsingConfigBuilder, RowLabel};
pub use extractor::{Assessment, TranscriptParser};
pub use locator::LocatedLine;
// Re-export domain types from core (canonical definitions live there)
pub use transcript_core::{EnrollmentScan, LOAD_COLUMNS, LoadRow, LoadTable, StatusVerdict};

/// Ways the transcript text can fail to have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("section '{0}' not found in transcript")]
    SectionNotFound(String),
    #[error("line '{0}' not found in the course-load section")]
    LabelNotFound(String),
    #[error("line with unexpected format: {0}")]
    RowFormatUnexpected(String),
}

/// Read the course-load table using the default vocabulary.
///
/// Pipeline:
/// 1. Require the "Carga Horária Integralizada/Pendente" header
/// 2. Locate the `Exigido`, `Integralizado` and `Pendente` lines, in that order
/// 3. Bind the first five `<n> h` values of each line to the load columns
pub fn extract_load_table(text: &str) -> Result<LoadTable, ParsingError> {
    TranscriptParser::new().load_table(text)
}

/// Scan for `MATRICULADO` lines using the default vocabulary.
pub fn scan_enrollment(text: &str) -> EnrollmentScan {
    TranscriptParser::new().scan_enrollment(text)
}
