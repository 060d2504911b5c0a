//! Error and help dialogs drawn above the current view.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::theme::{COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

pub const DISMISS_HINT: &str = "Press any key to dismiss";

/// Rows the error body may wrap onto before the hint line.
const ERROR_BODY_HEIGHT: u16 = 4;

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let config = DialogFrameConfig::new("Error", ERROR_BODY_HEIGHT + 2).border_color(COLOR_ERROR);
    let inner = render_dialog_frame(frame, area, &config);

    let [body, _, hint] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(message.to_string()).wrap(Wrap { trim: true }),
        body,
    );
    frame.render_widget(
        Paragraph::new(Line::from(DISMISS_HINT).style(Style::default().fg(COLOR_DIM))).centered(),
        hint,
    );
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}:", title),
        Style::default().fg(COLOR_SUCCESS),
    ))
}

fn binding(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<11}", keys), Style::default().fg(COLOR_BRAND)),
        Span::raw(action.to_string()),
    ])
}

pub fn help_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Honeybadger TUI Help",
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        section("Navigation"),
        binding("↑/k", "Move up"),
        binding("↓/j", "Move down"),
        binding("Enter/→/l", "Select/Drill down"),
        binding("Esc/←/h", "Go back"),
        binding("q", "Quit (or go back)"),
        binding("Ctrl+C", "Quit"),
        Line::default(),
        section("Actions"),
        binding("r", "Refresh current view"),
        binding("?", "Show this help"),
        Line::default(),
        section("Views"),
        Line::from("  Accounts → Projects → Faults/Deployments/Uptime/etc."),
        Line::default(),
        Line::from(Span::styled(
            "Press any key to close this help.",
            Style::default().fg(COLOR_DIM),
        )),
    ]
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let lines = help_lines();
    let config = DialogFrameConfig::new("Help", lines.len() as u16)
        .min_width(60)
        .max_width(64);
    let inner = render_dialog_frame(frame, area, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}
