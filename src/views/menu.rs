//! Menu screen: a short list of child screens reachable from one record.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::app::{ready_refresh, Loaded, Navigator, RefreshFuture, View, ViewContext};
use crate::ui::theme::{selected_style, COLOR_BORDER, COLOR_BRAND, COLOR_DIM};

type Opener = Box<dyn Fn() -> Box<dyn View> + Send>;

/// One entry: shortcut key, label, description and the child it opens.
pub struct MenuItem {
    label: String,
    description: String,
    shortcut: char,
    open: Opener,
}

impl MenuItem {
    pub fn new<F>(label: &str, description: impl Into<String>, shortcut: char, open: F) -> Self
    where
        F: Fn() -> Box<dyn View> + Send + 'static,
    {
        Self {
            label: label.to_string(),
            description: description.into(),
            shortcut,
            open: Box::new(open),
        }
    }
}

/// A menu has nothing to load; its refresh succeeds immediately.
pub struct MenuView {
    name: String,
    items: Vec<MenuItem>,
    state: ListState,
    nav: Navigator,
}

impl MenuView {
    pub fn new(nav: Navigator, name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            name: name.into(),
            items,
            state,
            nav,
        }
    }

    pub fn boxed(ctx: &ViewContext, name: impl Into<String>, items: Vec<MenuItem>) -> Box<dyn View> {
        Box::new(Self::new(ctx.nav.clone(), name, items))
    }

    #[cfg(test)]
    fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    fn open(&self, index: usize) {
        if let Some(item) = self.items.get(index) {
            self.nav.push((item.open)());
        }
    }
}

impl View for MenuView {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("({}) ", item.shortcut),
                            Style::default().fg(COLOR_BRAND),
                        ),
                        Span::styled(item.label.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", item.description),
                        Style::default().fg(COLOR_DIM),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(format!(" {} ", self.name))
                    .border_style(Style::default().fg(COLOR_BORDER)),
            )
            .highlight_style(selected_style())
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }

    fn refresh(&self) -> RefreshFuture {
        ready_refresh()
    }

    fn apply(&mut self, _loaded: Loaded) {}

    fn handle_input(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        let len = self.items.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down if len > 0 => {
                let next = self.state.selected().map_or(0, |i| (i + 1).min(len - 1));
                self.state.select(Some(next));
            }
            KeyCode::Char('k') | KeyCode::Up if len > 0 => {
                let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
                self.state.select(Some(previous));
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                if let Some(index) = self.state.selected() {
                    self.open(index);
                }
            }
            KeyCode::Char('h') => self.nav.pop(),
            KeyCode::Char(c) => match self.items.iter().position(|item| item.shortcut == c) {
                Some(index) => {
                    self.state.select(Some(index));
                    self.open(index);
                }
                None => return Some(key),
            },
            _ => return Some(key),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NavCommand;
    use crossterm::event::KeyModifiers;

    fn leaf(name: &'static str) -> Box<dyn View> {
        Box::new(MenuView::new(Navigator::channel().0, name, Vec::new()))
    }

    fn menu(nav: Navigator) -> MenuView {
        MenuView::new(
            nav,
            "Acme",
            vec![
                MenuItem::new("Projects", "View projects", 'p', || leaf("Projects")),
                MenuItem::new("Teams", "View teams", 't', || leaf("Teams")),
            ],
        )
    }

    fn press(view: &mut MenuView, code: KeyCode) -> Option<KeyEvent> {
        view.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn pushed_name(rx: &mut tokio::sync::mpsc::UnboundedReceiver<NavCommand>) -> String {
        match rx.try_recv().unwrap() {
            NavCommand::Push(view) => view.name(),
            NavCommand::Pop => "<pop>".to_string(),
        }
    }

    #[test]
    fn test_shortcut_opens_item() {
        let (nav, mut rx) = Navigator::channel();
        let mut view = menu(nav);

        assert!(press(&mut view, KeyCode::Char('t')).is_none());
        assert_eq!(pushed_name(&mut rx), "Teams");
        assert_eq!(view.selected(), Some(1));
    }

    #[test]
    fn test_enter_opens_selected() {
        let (nav, mut rx) = Navigator::channel();
        let mut view = menu(nav);

        press(&mut view, KeyCode::Enter);
        assert_eq!(pushed_name(&mut rx), "Projects");

        press(&mut view, KeyCode::Char('j'));
        press(&mut view, KeyCode::Right);
        assert_eq!(pushed_name(&mut rx), "Teams");
    }

    #[test]
    fn test_unknown_char_is_unhandled() {
        let (nav, mut rx) = Navigator::channel();
        let mut view = menu(nav);
        assert!(press(&mut view, KeyCode::Char('z')).is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_h_requests_back() {
        let (nav, mut rx) = Navigator::channel();
        let mut view = menu(nav);
        press(&mut view, KeyCode::Char('h'));
        assert_eq!(pushed_name(&mut rx), "<pop>");
    }

    #[tokio::test]
    async fn test_refresh_is_immediate() {
        let (nav, _rx) = Navigator::channel();
        let view = menu(nav);
        assert!(view.refresh().await.is_ok());
    }
}
