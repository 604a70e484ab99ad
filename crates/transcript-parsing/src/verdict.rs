use transcript_core::{EnrollmentScan, LoadTable, StatusVerdict};

/// Nothing pending and at least the required total completed.
pub fn load_complete(table: &LoadTable) -> bool {
    table.pending.total == 0 && table.completed.total >= table.required.total
}

pub fn has_active_enrollment(scan: &EnrollmentScan) -> bool {
    scan.count > 0
}

pub fn status_verdict(table: &LoadTable, scan: &EnrollmentScan) -> StatusVerdict {
    StatusVerdict {
        load_complete: load_complete(table),
        is_enrolled: has_active_enrollment(scan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transcript_core::LoadRow;

    fn totals(required: u32, completed: u32, pending: u32) -> LoadTable {
        let row = |total| LoadRow {
            total,
            ..LoadRow::default()
        };
        LoadTable {
            required: row(required),
            completed: row(completed),
            pending: row(pending),
        }
    }

    #[test]
    fn test_complete_when_nothing_pending() {
        assert!(load_complete(&totals(200, 200, 0)));
        assert!(load_complete(&totals(200, 260, 0)));
    }

    #[test]
    fn test_incomplete_when_pending() {
        assert!(!load_complete(&totals(200, 200, 5)));
        assert!(!load_complete(&totals(200, 400, 5)));
    }

    #[test]
    fn test_incomplete_when_completed_short() {
        assert!(!load_complete(&totals(200, 150, 0)));
    }

    #[test]
    fn test_status_verdict() {
        let scan = EnrollmentScan {
            periods: vec!["2024.1".into()],
            count: 3,
        };
        let verdict = status_verdict(&totals(200, 200, 0), &scan);
        assert!(verdict.load_complete);
        assert!(verdict.is_enrolled);

        let verdict = status_verdict(&totals(200, 100, 100), &EnrollmentScan::default());
        assert!(!verdict.load_complete);
        assert!(!verdict.is_enrolled);
    }
}
