use once_cell::sync::Lazy;
use regex::Regex;

use crate::ParsingError;
use crate::locator::LocatedLine;
use transcript_core::LoadRow;

/// An integer followed by the hour marker, e.g. `2400 h` or `360h`.
static HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([0-9]+)\s*h").unwrap());

/// Every hour quantity in `text`, left to right.
///
/// Returns `None` if a quantity does not fit in a `u32`.
pub fn hour_values(text: &str) -> Option<Vec<u32>> {
    HOURS_RE
        .captures_iter(text)
        .map(|caps| caps[1].parse().ok())
        .collect()
}

/// Bind the hour quantities of a located line to the five load columns.
///
/// Fewer than five quantities is an error; a sixth and later are ignored.
pub fn parse_load_row(found: &LocatedLine<'_>) -> Result<LoadRow, ParsingError> {
    hour_values(found.remainder)
        .as_deref()
        .and_then(LoadRow::from_values)
        .ok_or_else(|| ParsingError::RowFormatUnexpected(found.line.to_string()))
}
