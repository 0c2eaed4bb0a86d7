//! Plain-text rendering of tables and error reports.

use std::fmt::Write;
use workforce_core::{Department, ErrorResponse, Seller, WorkforceError};
use workforce_service::{format_salary, DATE_FORMAT};

/// Heading for rejected form input.
pub const VALIDATION_HEADING: &str = "Invalid input";
pub const SAVE_ERROR_HEADING: &str = "Error saving object";
pub const REMOVE_ERROR_HEADING: &str = "Error removing object";
pub const LOAD_ERROR_HEADING: &str = "Error loading objects";

/// Renders rows under left-aligned headers, one column width per header.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn department_table(departments: &[Department]) -> String {
    let rows: Vec<Vec<String>> = departments
        .iter()
        .map(|d| {
            vec![
                d.id.map(|id| id.to_string()).unwrap_or_default(),
                d.name.clone(),
            ]
        })
        .collect();
    table(&["Id", "Name"], &rows)
}

pub fn seller_table(sellers: &[Seller]) -> String {
    let rows: Vec<Vec<String>> = sellers
        .iter()
        .map(|s| {
            vec![
                s.id.map(|id| id.to_string()).unwrap_or_default(),
                s.name.clone(),
                s.email.clone(),
                s.birth_date.format(DATE_FORMAT).to_string(),
                format_salary(&s.base_salary),
                s.department_name().to_string(),
            ]
        })
        .collect();
    table(
        &["Id", "Name", "Email", "Birth Date", "Base Salary", "Department"],
        &rows,
    )
}

/// Renders a failed action.
///
/// Validation failures list one line per field. Everything else is shown
/// under `heading` with its error code.
pub fn error_report(heading: &str, error: &WorkforceError) -> String {
    let response = ErrorResponse::from_error(error);
    let mut out = String::new();

    match error.field_errors() {
        Some(fields) => {
            let _ = writeln!(out, "{VALIDATION_HEADING}:");
            for (field, message) in fields.iter() {
                let _ = writeln!(out, "  {field}: {message}");
            }
        }
        None => {
            let _ = writeln!(out, "{heading}");
            let _ = writeln!(out, "  {} ({})", error, response.code);
        }
    }
    out
}
