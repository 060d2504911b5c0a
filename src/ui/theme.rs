//! Color theme constants.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Chrome
// ============================================================================

/// Border color for tables, lists and dialogs
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header bar text
pub const COLOR_HEADER: Color = Color::White;

/// Brand mark in the header bar
pub const COLOR_BRAND: Color = Color::Yellow;

/// Footer hints and secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Column headings
pub const COLOR_COLUMN: Color = Color::Yellow;

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 44, 70);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Status colors
// ============================================================================

/// Active faults, down sites, failed checks
pub const COLOR_ERROR: Color = Color::Red;

/// Resolved faults, passing checks
pub const COLOR_SUCCESS: Color = Color::Green;

/// Ignored faults
pub const COLOR_WARNING: Color = Color::Yellow;

/// Field labels in detail views
pub const COLOR_LABEL: Color = Color::Yellow;

pub fn column_style() -> Style {
    Style::default()
        .fg(COLOR_COLUMN)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}
