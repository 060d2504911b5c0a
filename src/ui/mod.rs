//! Screen chrome: header, body, footer and overlays.
//!
//! The body belongs to whichever view is on top of the navigation stack;
//! everything around it is drawn from controller state.

pub mod components;
pub mod overlay;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Overlay};
use theme::{COLOR_BRAND, COLOR_DIM, COLOR_HEADER};

/// Footer key hints as (keys, action) pairs.
pub const FOOTER_HINTS: &[(&str, &str)] = &[
    ("↑↓/jk", "Navigate"),
    ("Enter/→", "Select"),
    ("Esc/←", "Back"),
    ("r", "Refresh"),
    ("q", "Quit"),
    ("?", "Help"),
];

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app.breadcrumb());

    if let Some(view) = app.top_view_mut() {
        view.render(frame, body);
    }

    render_footer(frame, footer);

    let area = frame.area();
    match app.overlay() {
        Some(Overlay::Error(_)) => {
            if let Some(message) = app.overlay_message() {
                overlay::render_error(frame, area, &message);
            }
        }
        Some(Overlay::Help) => overlay::render_help(frame, area),
        None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, breadcrumb: &str) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "Honeybadger",
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" │ {}", breadcrumb), Style::default().fg(COLOR_HEADER)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(FOOTER_HINTS.len() * 2);
    for (i, (keys, action)) in FOOTER_HINTS.iter().enumerate() {
        let separator = if i == 0 { "" } else { "  " };
        spans.push(Span::styled(
            format!("{}{}", separator, keys),
            Style::default().fg(COLOR_BRAND),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
