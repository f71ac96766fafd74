//! Centralized UI formatting and color utilities
//!
//! This module provides field markers, strength colors, and the formatting
//! patterns used by the regform CLI.

use colored::Color;

use crate::strength::StrengthLevel;

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("REGFORM_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Marker symbol and color shown next to a field.
///
/// - passed: ✓ (green)
/// - failed: ✗ (red)
pub fn field_marker(passed: bool) -> (&'static str, Color) {
    if passed {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    }
}

/// Color of the strength indicator fill for each level
pub fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => Color::Red,
        StrengthLevel::Medium => Color::Yellow,
        StrengthLevel::Strong => Color::Green,
    }
}

/// Common text formatting patterns
pub mod format {
    /// Fill bar for the strength meter, one cell per score point.
    pub fn strength_bar(score: u8, max: u8) -> String {
        let filled = score.min(max) as usize;
        let empty = (max as usize).saturating_sub(filled);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
    }

    /// Mask a secret for display
    pub fn mask(secret: &str) -> String {
        "•".repeat(secret.chars().count())
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }

    /// Pad a label to a fixed width so values line up
    pub fn padded_label(label: &str, width: usize) -> String {
        format!("{:<width$}", label, width = width)
    }
}
