//! Formatting helpers shared by the screens.

use chrono::{DateTime, Utc};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Cell,
};

use crate::ui::theme::{COLOR_ERROR, COLOR_LABEL, COLOR_SUCCESS};

/// Shorten `s` to at most `max_len` characters, ending in `...` when there
/// is room for it.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let mut out: String = s.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}

/// `2006-01-02 15:04:05`, or `-` when absent.
pub fn format_time(t: Option<&DateTime<Utc>>) -> String {
    t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `2006-01-02 15:04`, or `-` when absent.
pub fn format_minute(t: Option<&DateTime<Utc>>) -> String {
    t.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `2006-01-02`, or `fallback` when absent.
pub fn format_date_or(t: Option<&DateTime<Utc>>, fallback: &str) -> String {
    t.map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Plain table cell.
pub fn cell(text: impl Into<String>) -> Cell<'static> {
    Cell::from(text.into())
}

/// Colored table cell.
pub fn colored(text: impl Into<String>, color: Color) -> Cell<'static> {
    Cell::from(text.into()).style(Style::default().fg(color))
}

/// `Yes` in green or `No` in red.
pub fn up_down(value: bool) -> Cell<'static> {
    if value {
        colored("Yes", COLOR_SUCCESS)
    } else {
        colored("No", COLOR_ERROR)
    }
}

/// `Label: value` detail line.
pub fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_LABEL)),
        Span::raw(value.into()),
    ])
}

/// `Label: value` with a colored value.
pub fn colored_field(label: &str, value: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(COLOR_LABEL)),
        Span::styled(value.into(), Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("NoMethodError in controller", 10), "NoMetho...");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("日本語のエラー", 5), "日本...");
    }

    #[test]
    fn test_format_time() {
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_time(Some(&t)), "2024-01-02 03:04:05");
        assert_eq!(format_minute(Some(&t)), "2024-01-02 03:04");
        assert_eq!(format_date_or(Some(&t), "No"), "2024-01-02");
        assert_eq!(format_time(None), "-");
        assert_eq!(format_date_or(None, "No"), "No");
    }

    #[test]
    fn test_field_line() {
        let line = field("Environment", "production");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Environment: production");
    }
}
