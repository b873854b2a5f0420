//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.

use crate::generate::{BuildReport, CheckReport};

/// Format build results: a summary line, then one line per written file
/// with its byte size.
///
/// ```text
/// Built 4 pages in _site/
///     index.html (5123 bytes)
///     page-2.html (5098 bytes)
///     fireworks.html (6544 bytes)
///     agenda.html (4210 bytes)
/// ```
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.files.len() + 1);
    let noun = if report.files.len() == 1 { "page" } else { "pages" };
    lines.push(format!(
        "Built {} {} in {}/",
        report.files.len(),
        noun,
        report.out_dir.display()
    ));
    for file in &report.files {
        lines.push(format!("    {} ({} bytes)", file.filename, file.bytes));
    }
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{line}");
    }
}

/// Format check results.
pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let noun = if report.page_count == 1 { "page" } else { "pages" };
    vec![
        "Config is valid".to_string(),
        format!("    Question {}: {}", noun, report.page_count),
        format!("    Agenda: {}", report.agenda_path.display()),
    ]
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{line}");
    }
}
