use transcript_core::{EnrollmentScan, LoadRow, LoadTable, StatusVerdict};

use crate::config::{ParsingConfig, RowLabel};
use crate::locator::LocatedLine;
use crate::{ParsingError, checker, enrollment, load_table, locator, verdict};

/// A configurable transcript parser.
///
/// Holds a [`ParsingConfig`] and exposes each pipeline step as a method.
/// Every method is a pure function of its input text; the parser keeps no
/// state between calls and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParsingConfig,
}

impl TranscriptParser {
    /// Create a parser with the default vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Check that the course-load section header is present.
    pub fn require_section(&self, text: &str) -> Result<(), ParsingError> {
        locator::require_section(text, &self.config)
    }

    /// Find the line starting with `label` and return it with its remainder.
    pub fn locate<'a>(
        &self,
        text: &'a str,
        label: &RowLabel,
    ) -> Result<LocatedLine<'a>, ParsingError> {
        locator::locate(text, label)
    }

    /// Read one labeled row as five hour columns.
    pub fn load_row(&self, text: &str, label: &RowLabel) -> Result<LoadRow, ParsingError> {
        load_table::read_row(text, label)
    }

    /// Read the whole course-load table.
    pub fn load_table(&self, text: &str) -> Result<LoadTable, ParsingError> {
        load_table::extract_load_table(text, &self.config)
    }

    /// Count enrollment-keyword lines and collect their periods.
    pub fn scan_enrollment(&self, text: &str) -> EnrollmentScan {
        enrollment::scan_enrollment(text, &self.config)
    }

    /// Last hour value on the pending line.
    pub fn pending_total(&self, text: &str) -> Result<u32, ParsingError> {
        checker::pending_total(text, &self.config)
    }

    /// Whether the pending line's last value is zero.
    pub fn has_completed_load(&self, text: &str) -> Result<bool, ParsingError> {
        checker::has_completed_load(text, &self.config)
    }

    /// Whether the enrollment keyword appears anywhere.
    pub fn is_enrolled(&self, text: &str) -> bool {
        checker::is_enrolled(text, &self.config)
    }

    /// Read the table and scan enrollment, then derive both verdicts.
    pub fn assess(&self, text: &str) -> Result<Assessment, ParsingError> {
        let load = self.load_table(text)?;
        let enrollment = self.scan_enrollment(text);
        let verdict = verdict::status_verdict(&load, &enrollment);
        Ok(Assessment {
            load,
            enrollment,
            verdict,
        })
    }
}

/// Everything extracted from one transcript.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Assessment {
    pub load: LoadTable,
    pub enrollment: EnrollmentScan,
    pub verdict: StatusVerdict,
}
