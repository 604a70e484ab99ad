use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;
use crate::text_processing::split_lines;
use transcript_core::EnrollmentScan;

/// A `YYYY.N` period at the start of a line, followed by whitespace.
static PERIOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([0-9]{4}\.[0-9])\s").unwrap());

fn has_keyword(line: &str, keyword: &str) -> bool {
    line.to_uppercase().contains(keyword)
}

/// Count the lines carrying the enrollment keyword and collect their periods.
///
/// Every line with the keyword counts, whether or not it starts with a
/// period, so `count` can exceed the number of periods.
pub fn scan_enrollment(text: &str, config: &ParsingConfig) -> EnrollmentScan {
    let mut periods = BTreeSet::new();
    let mut count = 0;

    for line in split_lines(text) {
        if !has_keyword(line, &config.enrollment_keyword) {
            continue;
        }
        if let Some(caps) = PERIOD_RE.captures(line) {
            periods.insert(caps[1].to_string());
        }
        count += 1;
    }

    tracing::debug!(count, periods = periods.len(), "scanned enrollment lines");
    EnrollmentScan::new(periods, count)
}

/// Whether the keyword appears anywhere in the text, on any line.
pub fn contains_keyword(text: &str, config: &ParsingConfig) -> bool {
    has_keyword(text, &config.enrollment_keyword)
}
