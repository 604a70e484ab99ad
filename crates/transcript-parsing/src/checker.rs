//! Single-answer status checks.
//!
//! These are looser than [`crate::load_table`]: the pending total is the
//! last hour value on the first line that starts with the pending label and
//! ends with an hour value, with no section header check and no five-column requirement. Each check
//! stands on its own so a caller can ask one without the other succeeding.

use crate::ParsingError;
use crate::config::ParsingConfig;
use crate::enrollment::contains_keyword;

/// The last hour quantity on the pending line.
///
/// The line must end with the quantity (trailing whitespace allowed).
pub fn pending_total(text: &str, config: &ParsingConfig) -> Result<u32, ParsingError> {
    let caps = config
        .pending_total_re
        .captures(text)
        .ok_or_else(|| ParsingError::LabelNotFound(config.pending.as_str().to_string()))?;

    let line = caps.get(0).map_or("", |m| m.as_str().trim());
    caps[1]
        .parse()
        .map_err(|_| ParsingError::RowFormatUnexpected(line.to_string()))
}

/// Whether the pending total is zero.
pub fn has_completed_load(text: &str, config: &ParsingConfig) -> Result<bool, ParsingError> {
    Ok(pending_total(text, config)? == 0)
}

/// Whether the enrollment keyword appears anywhere in the text.
pub fn is_enrolled(text: &str, config: &ParsingConfig) -> bool {
    contains_keyword(text, config)
}
