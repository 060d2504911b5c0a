//! Detail screen: labelled fields of a single record.

use crossterm::event::{KeyCode, KeyEvent};
use futures::future::BoxFuture;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::app::{Loaded, Navigator, RefreshFuture, View, ViewContext};
use crate::error::ClientError;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM};

pub trait DetailSource: Send + 'static {
    type Record: Send + 'static;

    /// Block title, e.g. the fault class.
    fn heading(&self) -> String;

    fn fetch(&self) -> BoxFuture<'static, Result<Self::Record, ClientError>>;

    fn lines(&self, record: &Self::Record) -> Vec<Line<'static>>;
}

/// Breadcrumb label of every detail screen.
pub const DETAILS_NAME: &str = "Details";

pub struct DetailView<S: DetailSource> {
    source: S,
    record: Option<S::Record>,
    scroll: u16,
    /// Furthest scroll offset that still shows text, from the last render.
    max_scroll: u16,
    nav: Navigator,
}

impl<S: DetailSource> DetailView<S> {
    pub fn new(nav: Navigator, source: S) -> Self {
        Self {
            source,
            record: None,
            scroll: 0,
            max_scroll: 0,
            nav,
        }
    }

    /// A detail view that already holds its record and shows it before the
    /// first refresh completes.
    pub fn with_record(nav: Navigator, source: S, record: S::Record) -> Self {
        Self {
            record: Some(record),
            ..Self::new(nav, source)
        }
    }

    pub fn boxed(ctx: &ViewContext, source: S) -> Box<dyn View> {
        Box::new(Self::new(ctx.nav.clone(), source))
    }
}

impl<S: DetailSource> View for DetailView<S> {
    fn name(&self) -> String {
        DETAILS_NAME.to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = match &self.record {
            Some(record) => self.source.lines(record),
            None => vec![Line::from("Loading...").style(Style::default().fg(COLOR_DIM))],
        };

        let block = Block::bordered()
            .title(format!(" {} ", self.source.heading()))
            .border_style(Style::default().fg(COLOR_BORDER));
        let inner = block.inner(area);
        self.max_scroll = wrapped_height(&lines, inner.width).saturating_sub(inner.height);
        self.scroll = self.scroll.min(self.max_scroll);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        frame.render_widget(paragraph, area);
    }

    fn refresh(&self) -> RefreshFuture {
        let fetch = self.source.fetch();
        Box::pin(async move { fetch.await.map(|record| Box::new(record) as Loaded) })
    }

    fn apply(&mut self, loaded: Loaded) {
        match loaded.downcast::<S::Record>() {
            Ok(record) => self.record = Some(*record),
            Err(_) => tracing::warn!(heading = %self.source.heading(), "ignoring refresh payload of unexpected type"),
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll)
            }
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('h') => self.nav.pop(),
            _ => return Some(key),
        }
        None
    }
}

/// Rows `lines` occupy when wrapped to `width` columns.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use futures::FutureExt;
    use ratatui::{backend::TestBackend, Terminal};

    struct Greeting;

    impl DetailSource for Greeting {
        type Record = String;

        fn heading(&self) -> String {
            "Greeting".to_string()
        }
        fn fetch(&self) -> BoxFuture<'static, Result<String, ClientError>> {
            futures::future::ready(Ok("hello".to_string())).boxed()
        }
        fn lines(&self, record: &String) -> Vec<Line<'static>> {
            vec![crate::views::helpers::field("Message", record.clone())]
        }
    }

    fn screen(view: &mut dyn View) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn test_fetch_then_render() {
        let (nav, _rx) = Navigator::channel();
        let mut view = DetailView::new(nav, Greeting);
        assert_eq!(view.name(), "Details");
        assert!(screen(&mut view).contains("Loading..."));

        let loaded = view.refresh().await.unwrap();
        view.apply(loaded);
        let text = screen(&mut view);
        assert!(text.contains("Greeting"));
        assert!(text.contains("Message: hello"));
    }

    #[test]
    fn test_prepopulated_record_renders_immediately() {
        let (nav, _rx) = Navigator::channel();
        let mut view = DetailView::with_record(nav, Greeting, "hi".to_string());
        assert!(screen(&mut view).contains("Message: hi"));
    }

    struct Numbered;

    impl DetailSource for Numbered {
        type Record = usize;

        fn heading(&self) -> String {
            "Numbered".to_string()
        }
        fn fetch(&self) -> BoxFuture<'static, Result<usize, ClientError>> {
            futures::future::ready(Ok(10)).boxed()
        }
        fn lines(&self, record: &usize) -> Vec<Line<'static>> {
            (1..=*record).map(|i| Line::from(format!("line {}", i))).collect()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_keys() {
        let (nav, _rx) = Navigator::channel();
        let mut view = DetailView::new(nav, Greeting);
        assert!(view.handle_input(key(KeyCode::Char('k'))).is_none());
        assert!(view.handle_input(key(KeyCode::Char('j'))).is_none());
        assert_eq!(view.scroll, 0);
        assert!(view.handle_input(key(KeyCode::Char('x'))).is_some());
    }

    #[test]
    fn test_scroll_stops_at_last_line() {
        let (nav, _rx) = Navigator::channel();
        let mut view = DetailView::with_record(nav, Numbered, 10);
        // 30x5 leaves three rows inside the border.
        screen(&mut view);

        for _ in 0..50 {
            view.handle_input(key(KeyCode::Down));
        }
        assert_eq!(view.scroll, 7);
        let text = screen(&mut view);
        assert!(text.contains("line 10"));
        assert!(!text.contains("line 7 "));

        // One press back up moves immediately.
        view.handle_input(key(KeyCode::Char('k')));
        assert_eq!(view.scroll, 6);
    }

    #[test]
    fn test_wrapped_lines_count_toward_height() {
        let lines = vec![Line::from("a".repeat(25)), Line::from(""), Line::from("short")];
        assert_eq!(wrapped_height(&lines, 10), 5);
        assert_eq!(wrapped_height(&lines, 0), 0);
    }
}
