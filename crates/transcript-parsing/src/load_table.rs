use transcript_core::{LoadRow, LoadTable};

use crate::ParsingError;
use crate::config::{ParsingConfig, RowLabel};
use crate::locator::{locate, require_section};
use crate::row::parse_load_row;

pub(crate) fn read_row(text: &str, label: &RowLabel) -> Result<LoadRow, ParsingError> {
    let found = locate(text, label)?;
    let row = parse_load_row(&found)?;
    tracing::debug!(label = label.as_str(), total = row.total, "read load row");
    Ok(row)
}

/// Read the required, completed and pending rows of the course-load section.
///
/// Rows are read in that order and the first failure is returned; a table
/// is only produced when all three rows parse.
pub fn extract_load_table(text: &str, config: &ParsingConfig) -> Result<LoadTable, ParsingError> {
    require_section(text, config)?;

    Ok(LoadTable {
        required: read_row(text, &config.required)?,
        completed: read_row(text, &config.completed)?,
        pending: read_row(text, &config.pending)?,
    })
}
