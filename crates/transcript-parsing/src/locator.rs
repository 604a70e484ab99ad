use crate::ParsingError;
use crate::config::{ParsingConfig, RowLabel};

/// A labeled line found in the transcript text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedLine<'a> {
    /// The whole matched line, surrounding whitespace trimmed.
    pub line: &'a str,
    /// Everything after the label and the whitespace that follows it.
    pub remainder: &'a str,
}

/// Check that the course-load section header is present in `text`.
///
/// The row labels are common words; requiring the header first keeps a
/// same-named line elsewhere in the document from being read as a row.
pub fn require_section(text: &str, config: &ParsingConfig) -> Result<(), ParsingError> {
    if text.contains(config.section_header.as_str()) {
        Ok(())
    } else {
        Err(ParsingError::SectionNotFound(config.section_header.clone()))
    }
}

/// Find the first line that begins with `label` (case-insensitive, leading
/// whitespace ignored).
pub fn locate<'a>(text: &'a str, label: &RowLabel) -> Result<LocatedLine<'a>, ParsingError> {
    let caps = label
        .line_re
        .captures(text)
        .ok_or_else(|| ParsingError::LabelNotFound(label.as_str().to_string()))?;

    // Both groups always participate in a match.
    let whole = caps.get(0).map_or("", |m| m.as_str());
    let remainder = caps.get(1).map_or("", |m| m.as_str());

    Ok(LocatedLine {
        line: whole.trim(),
        remainder,
    })
}
