use std::collections::BTreeSet;

use serde::Serialize;

pub mod backend;
pub mod config_file;

pub use backend::{BackendError, TextBackend};

/// Column names of a course-load row, in the order they appear on the line.
pub const LOAD_COLUMNS: [&str; 5] = ["required", "optional", "extension", "complementary", "total"];

/// One line of the course-load section: five hour totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadRow {
    pub required: u32,
    pub optional: u32,
    pub extension: u32,
    pub complementary: u32,
    pub total: u32,
}

impl LoadRow {
    /// Bind the first five values to the columns in [`LOAD_COLUMNS`] order.
    ///
    /// Returns `None` when fewer than five values are given. Values past the
    /// fifth are ignored.
    pub fn from_values(values: &[u32]) -> Option<Self> {
        match values {
            [required, optional, extension, complementary, total, ..] => Some(Self {
                required: *required,
                optional: *optional,
                extension: *extension,
                complementary: *complementary,
                total: *total,
            }),
            _ => None,
        }
    }

    /// Look up a column by name (see [`LOAD_COLUMNS`]).
    pub fn get(&self, column: &str) -> Option<u32> {
        match column {
            "required" => Some(self.required),
            "optional" => Some(self.optional),
            "extension" => Some(self.extension),
            "complementary" => Some(self.complementary),
            "total" => Some(self.total),
            _ => None,
        }
    }

    /// `(column, hours)` pairs in column order.
    pub fn columns(&self) -> [(&'static str, u32); 5] {
        [
            (LOAD_COLUMNS[0], self.required),
            (LOAD_COLUMNS[1], self.optional),
            (LOAD_COLUMNS[2], self.extension),
            (LOAD_COLUMNS[3], self.complementary),
            (LOAD_COLUMNS[4], self.total),
        ]
    }
}

/// The three rows of the "Carga Horária Integralizada/Pendente" section.
///
/// Only ever built from three successfully extracted rows; there is no
/// partial table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadTable {
    /// The `Exigido` row.
    pub required: LoadRow,
    /// The `Integralizado` row.
    pub completed: LoadRow,
    /// The `Pendente` row.
    pub pending: LoadRow,
}

/// Result of scanning a transcript for the enrollment keyword.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EnrollmentScan {
    /// Distinct `YYYY.N` periods, sorted ascending.
    pub periods: Vec<String>,
    /// Number of lines carrying the keyword, with or without a period.
    pub count: usize,
}

impl EnrollmentScan {
    pub fn new(periods: BTreeSet<String>, count: usize) -> Self {
        Self {
            periods: periods.into_iter().collect(),
            count,
        }
    }
}

/// Derived status booleans. Always computed from a table and a scan, never
/// stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusVerdict {
    pub load_complete: bool,
    pub is_enrolled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_row_binds_first_five() {
        let row = LoadRow::from_values(&[2400, 360, 320, 120, 3200, 99]).unwrap();
        assert_eq!(row.required, 2400);
        assert_eq!(row.optional, 360);
        assert_eq!(row.extension, 320);
        assert_eq!(row.complementary, 120);
        assert_eq!(row.total, 3200);
    }

    #[test]
    fn test_load_row_needs_five_values() {
        assert!(LoadRow::from_values(&[1, 2, 3, 4]).is_none());
        assert!(LoadRow::from_values(&[]).is_none());
    }

    #[test]
    fn test_load_row_columns_in_order() {
        let row = LoadRow::from_values(&[1, 2, 3, 4, 10]).unwrap();
        assert_eq!(
            row.columns(),
            [
                ("required", 1),
                ("optional", 2),
                ("extension", 3),
                ("complementary", 4),
                ("total", 10),
            ]
        );
        assert_eq!(row.get("bogus"), None);
    }

    #[test]
    fn test_enrollment_scan_sorts_periods() {
        let periods: BTreeSet<String> = ["2024.2", "2023.1", "2024.1"]
            .into_iter()
            .map(String::from)
            .collect();
        let scan = EnrollmentScan::new(periods, 5);
        assert_eq!(scan.periods, vec!["2023.1", "2024.1", "2024.2"]);
        assert_eq!(scan.count, 5);
    }

    #[test]
    fn test_load_table_serializes_by_row_name() {
        let row = LoadRow::from_values(&[1, 2, 3, 4, 10]).unwrap();
        let table = LoadTable {
            required: row,
            completed: row,
            pending: LoadRow::default(),
        };
        let json = serde_json::to_value(table).unwrap();
        assert_eq!(json["required"]["total"], 10);
        assert_eq!(json["pending"]["total"], 0);
    }
}
