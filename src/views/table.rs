//! Generic table screen.
//!
//! A [`TableSource`] supplies the fetch, the column layout and the row
//! projection; [`TableView`] owns the loaded records and the selection and
//! implements the View contract on top.

use crossterm::event::{KeyCode, KeyEvent};
use futures::future::BoxFuture;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{Loaded, Navigator, RefreshFuture, View, ViewContext};
use crate::error::ClientError;
use crate::ui::theme::{column_style, selected_style, COLOR_BORDER, COLOR_DIM};

/// One column: heading and relative width.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: Constraint,
}

impl Column {
    pub const fn new(header: &'static str, fill: u16) -> Self {
        Self {
            header,
            width: Constraint::Fill(fill),
        }
    }
}

/// Where a [`TableView`] gets its rows from.
pub trait TableSource: Send + 'static {
    type Record: Send + 'static;

    /// Breadcrumb label.
    fn title(&self) -> String;

    /// Table block title. Defaults to the breadcrumb label.
    fn heading(&self) -> String {
        self.title()
    }

    fn columns(&self) -> &'static [Column];

    /// Shown when a load returns no records, e.g. "No faults found".
    fn empty_message(&self) -> &'static str;

    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Self::Record>, ClientError>>;

    fn row(&self, record: &Self::Record) -> Vec<Cell<'static>>;

    /// Child screen for a selected record. `None` for leaf tables.
    fn open(&self, _record: &Self::Record) -> Option<Box<dyn View>> {
        None
    }
}

pub struct TableView<S: TableSource> {
    source: S,
    records: Option<Vec<S::Record>>,
    state: TableState,
    nav: Navigator,
}

impl<S: TableSource> TableView<S> {
    pub fn new(nav: Navigator, source: S) -> Self {
        Self {
            source,
            records: None,
            state: TableState::default(),
            nav,
        }
    }

    pub fn boxed(ctx: &ViewContext, source: S) -> Box<dyn View> {
        Box::new(Self::new(ctx.nav.clone(), source))
    }

    #[cfg(test)]
    fn records(&self) -> Option<&[S::Record]> {
        self.records.as_deref()
    }

    #[cfg(test)]
    fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    fn clamp_selection(&mut self) {
        let len = self.len();
        if len == 0 {
            self.state.select(None);
        } else {
            let current = self.state.selected().unwrap_or(0);
            self.state.select(Some(current.min(len - 1)));
        }
    }

    fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let next = self.state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.len() == 0 {
            return;
        }
        let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }

    fn open_selected(&mut self) {
        let Some(index) = self.state.selected() else {
            return;
        };
        let Some(record) = self.records.as_ref().and_then(|records| records.get(index)) else {
            return;
        };
        if let Some(child) = self.source.open(record) {
            self.nav.push(child);
        }
    }
}

impl<S: TableSource> View for TableView<S> {
    fn name(&self) -> String {
        self.source.title()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" {} ", self.source.heading()))
            .border_style(Style::default().fg(COLOR_BORDER));

        let columns = self.source.columns();
        let header = Row::new(columns.iter().map(|c| Cell::from(c.header))).style(column_style());
        let widths = columns.iter().map(|c| c.width);

        let rows: Vec<Row> = match &self.records {
            None => {
                let loading = Paragraph::new(Line::from("Loading...").style(Style::default().fg(COLOR_DIM)))
                    .block(block);
                frame.render_widget(loading, area);
                return;
            }
            Some(records) if records.is_empty() => vec![Row::new(vec![Cell::from(
                self.source.empty_message(),
            )
            .style(Style::default().fg(COLOR_DIM))])],
            Some(records) => records
                .iter()
                .map(|record| Row::new(self.source.row(record)))
                .collect(),
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(selected_style())
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }

    fn refresh(&self) -> RefreshFuture {
        let fetch = self.source.fetch();
        Box::pin(async move { fetch.await.map(|records| Box::new(records) as Loaded) })
    }

    fn apply(&mut self, loaded: Loaded) {
        match loaded.downcast::<Vec<S::Record>>() {
            Ok(records) => {
                self.records = Some(*records);
                self.clamp_selection();
            }
            Err(_) => tracing::warn!(view = %self.source.title(), "ignoring refresh payload of unexpected type"),
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Home => {
                if self.len() > 0 {
                    self.state.select(Some(0));
                }
            }
            KeyCode::End => {
                let len = self.len();
                if len > 0 {
                    self.state.select(Some(len - 1));
                }
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self.open_selected(),
            KeyCode::Char('h') => self.nav.pop(),
            _ => return Some(key),
        }
        None
    }
}
