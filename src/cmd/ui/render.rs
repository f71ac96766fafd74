//! Terminal rendering of validation results, the strength meter and the
//! confirmation panel.
//!
//! Each `*_lines` function is pure apart from coloring through [`Output::paint`];
//! the matching `show_*` function writes those lines or, in JSON mode, the
//! serialized value.

use colored::Color;
use serde_json::json;

use regform::form::{Field, FormFields};
use regform::session::SubmissionSummary;
use regform::strength::{StrengthMeter, MAX_SCORE};
use regform::ui::{self, format};
use regform::validation::ValidationReport;

use super::output::{Output, OutputMode};

const LABEL_WIDTH: usize = 18;

/// Display value of a field. Secrets are masked.
fn display_value(fields: &FormFields, field: Field) -> String {
    match field {
        Field::Password | Field::ConfirmPassword => {
            format::mask(fields.text(field).unwrap_or_default())
        }
        Field::Gender => fields
            .gender
            .map(|g| g.label().to_string())
            .unwrap_or_default(),
        Field::Terms => {
            let text = if fields.terms_accepted {
                "accepted"
            } else {
                "not accepted"
            };
            text.to_string()
        }
        _ => fields.text(field).unwrap_or_default().to_string(),
    }
}

/// One line per field: marker, label, value, and the error slot when set.
pub fn report_lines(output: &Output, fields: &FormFields, report: &ValidationReport) -> Vec<String> {
    Field::ALL
        .iter()
        .map(|&field| {
            let passed = report.message(field).is_none();
            let (symbol, color) = ui::field_marker(passed);
            let marker = output.paint(symbol, color);
            let label = format::padded_label(field.label(), LABEL_WIDTH);
            let value = display_value(fields, field);
            let label = if report.has_marker(field) {
                output.paint(&label, Color::Red)
            } else {
                label
            };

            let mut line = format!("{} {} {}", marker, label, value);
            let slot = report.slot(field);
            if !slot.is_empty() {
                if !value.is_empty() {
                    line.push_str("  ");
                }
                line.push_str(&output.paint(&format!("← {}", slot), Color::Red));
            }
            line.trim_end().to_string()
        })
        .collect()
}

pub fn show_report(output: &Output, fields: &FormFields, report: &ValidationReport) {
    match output.mode() {
        OutputMode::Json => {
            output.json(&json!({ "report": report }));
        }
        // Only the error slots survive quiet mode
        OutputMode::Quiet => {
            for (field, message) in report.errors().iter() {
                output.error(&format!("{}: {}", field.label(), message));
            }
        }
        OutputMode::Human => {
            output.lines(&report_lines(output, fields, report));
            if report.is_valid() {
                output.success("All fields are valid");
            } else {
                output.error(&format!(
                    "{} field(s) need attention",
                    report.failing_fields().len()
                ));
            }
        }
    }
}

/// Strength line, e.g. `Strength: [███░░] Medium`. Empty when the meter is clear.
pub fn strength_line(output: &Output, meter: &StrengthMeter) -> Option<String> {
    let level = meter.level()?;
    let bar = format::strength_bar(meter.score(), MAX_SCORE);
    let color = ui::strength_color(level);
    Some(format!(
        "Strength: {} {}",
        output.paint(&bar, color),
        output.paint(level.label(), color)
    ))
}

pub fn show_strength(output: &Output, meter: &StrengthMeter) {
    match output.mode() {
        OutputMode::Json => output.json(&json!({
            "score": meter.score(),
            "level": meter.level(),
            "label": meter.label(),
        })),
        _ => {
            if let Some(line) = strength_line(output, meter) {
                output.lines(&[line]);
            }
        }
    }
}

/// Boxed confirmation panel
pub fn panel_lines(output: &Output, summary: &SubmissionSummary) -> Vec<String> {
    let rows: Vec<String> = summary.to_string().lines().map(str::to_string).collect();
    let title = "Registration successful";
    let width = rows
        .iter()
        .map(|r| r.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("┌{}┐", format::separator(width)));
    lines.push(format!(
        "│ {} │",
        output.paint(&format!("{:<w$}", title, w = width - 2), Color::Green)
    ));
    lines.push(format!("├{}┤", format::separator(width)));
    for row in rows {
        lines.push(format!("│ {:<w$} │", row, w = width - 2));
    }
    lines.push(format!("└{}┘", format::separator(width)));
    lines
}

pub fn show_panel(output: &Output, summary: &SubmissionSummary) {
    match output.mode() {
        OutputMode::Json => output.json(&json!({ "summary": summary })),
        _ => output.lines(&panel_lines(output, summary)),
    }
}
