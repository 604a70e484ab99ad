use std::io::Write;

use owo_colors::OwoColorize;
use transcript_ingest::{Assessment, EnrollmentScan, LoadTable};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

fn yes_no(value: bool, color: ColorMode) -> String {
    match (value, color.enabled()) {
        (true, true) => "YES".green().to_string(),
        (false, true) => "NO".red().to_string(),
        (true, false) => "YES".to_string(),
        (false, false) => "NO".to_string(),
    }
}

fn heading(w: &mut dyn Write, title: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", title.bold())
    } else {
        writeln!(w, "{}", title)
    }
}

/// Print the course-load totals and whether the load is complete.
pub fn print_load_report(
    w: &mut dyn Write,
    section_title: &str,
    table: &LoadTable,
    complete: bool,
    color: ColorMode,
) -> std::io::Result<()> {
    heading(w, section_title, color)?;
    writeln!(w, "Required (total): {}h", table.required.total)?;
    writeln!(w, "Completed (total): {}h", table.completed.total)?;
    writeln!(w, "Pending (total): {}h", table.pending.total)?;
    writeln!(w, "Load complete: {}", yes_no(complete, color))?;
    Ok(())
}

/// Print the enrollment verdict, keyword line count and periods.
pub fn print_enrollment_report(
    w: &mut dyn Write,
    keyword: &str,
    scan: &EnrollmentScan,
    enrolled: bool,
    color: ColorMode,
) -> std::io::Result<()> {
    heading(w, "Enrollment check", color)?;
    writeln!(w, "Enrolled: {}", yes_no(enrolled, color))?;
    writeln!(w, "Components with status {}: {}", keyword, scan.count)?;
    let periods = if scan.periods.is_empty() {
        "none found".to_string()
    } else {
        scan.periods.join(", ")
    };
    writeln!(w, "Periods with enrollment: {}", periods)?;
    Ok(())
}

/// Print one line of the lightweight status check.
pub fn print_check(
    w: &mut dyn Write,
    name: &str,
    outcome: &Result<bool, String>,
    color: ColorMode,
) -> std::io::Result<()> {
    match outcome {
        Ok(value) => writeln!(w, "{}: {}", name, value),
        Err(message) if color.enabled() => writeln!(w, "{}: {} {}", name, "error:".red(), message),
        Err(message) => writeln!(w, "{}: error: {}", name, message),
    }
}

/// Print the combined load and enrollment report.
pub fn print_assessment(
    w: &mut dyn Write,
    section_title: &str,
    keyword: &str,
    assessment: &Assessment,
    color: ColorMode,
) -> std::io::Result<()> {
    print_load_report(
        w,
        section_title,
        &assessment.load,
        assessment.verdict.load_complete,
        color,
    )?;
    writeln!(w)?;
    print_enrollment_report(
        w,
        keyword,
        &assessment.enrollment,
        assessment.verdict.is_enrolled,
        color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use transcript_ingest::LoadRow;

    fn table() -> LoadTable {
        LoadTable {
            required: LoadRow::from_values(&[2400, 360, 320, 120, 3200]).unwrap(),
            completed: LoadRow::from_values(&[2400, 360, 320, 120, 3200]).unwrap(),
            pending: LoadRow::default(),
        }
    }

    fn render(f: impl FnOnce(&mut dyn Write) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn load_report_plain() {
        let out = render(|w| {
            print_load_report(
                w,
                "Carga Horária Integralizada/Pendente",
                &table(),
                true,
                ColorMode(false),
            )
        });
        assert_eq!(
            out,
            "Carga Horária Integralizada/Pendente\n\
             Required (total): 3200h\n\
             Completed (total): 3200h\n\
             Pending (total): 0h\n\
             Load complete: YES\n"
        );
    }

    #[test]
    fn enrollment_report_without_periods() {
        let scan = EnrollmentScan {
            periods: Vec::new(),
            count: 1,
        };
        let out = render(|w| {
            print_enrollment_report(w, "MATRICULADO", &scan, true, ColorMode(false))
        });
        assert!(out.contains("Enrolled: YES\n"));
        assert!(out.contains("Components with status MATRICULADO: 1\n"));
        assert!(out.contains("Periods with enrollment: none found\n"));
    }

    #[test]
    fn enrollment_report_lists_periods() {
        let scan = EnrollmentScan {
            periods: vec!["2024.1".into(), "2024.2".into()],
            count: 2,
        };
        let out = render(|w| {
            print_enrollment_report(w, "MATRICULADO", &scan, true, ColorMode(false))
        });
        assert!(out.contains("Periods with enrollment: 2024.1, 2024.2\n"));
    }

    #[test]
    fn check_line_reports_error() {
        let out = render(|w| {
            print_check(
                w,
                "Completed load",
                &Err("line 'Pendente' not found".into()),
                ColorMode(false),
            )
        });
        assert_eq!(out, "Completed load: error: line 'Pendente' not found\n");
    }

    #[test]
    fn colored_output_contains_escape_codes() {
        let out = render(|w| print_load_report(w, "Title", &table(), false, ColorMode(true)));
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("NO"));
    }
}
