//! The drill-down path from the root view to the visible one.

use std::fmt;

use super::view::View;

/// Separator between breadcrumb segments.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Identity of one pushed view. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

struct Entry {
    id: ViewId,
    view: Box<dyn View>,
}

/// Ordered views, root at index 0. Only the top is rendered or receives input.
///
/// Once a root has been pushed the stack never becomes empty: `pop` refuses
/// to remove the last entry.
#[derive(Default)]
pub struct NavigationStack {
    entries: Vec<Entry>,
    next_id: u64,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, view: Box<dyn View>) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, view });
        id
    }

    /// Remove and return the top view, unless it is the root.
    pub fn pop(&mut self) -> Option<(ViewId, Box<dyn View>)> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop().map(|entry| (entry.id, entry.view))
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn top_id(&self) -> Option<ViewId> {
        self.entries.last().map(|entry| entry.id)
    }

    pub fn top_mut(&mut self) -> Option<&mut (dyn View + 'static)> {
        self.entries.last_mut().map(|entry| entry.view.as_mut())
    }

    pub fn get(&self, id: ViewId) -> Option<&(dyn View + 'static)> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.view.as_ref())
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut (dyn View + 'static)> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| entry.view.as_mut())
    }

    /// View names from root to top.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.view.name()).collect()
    }

    pub fn breadcrumb(&self) -> String {
        self.names().join(BREADCRUMB_SEPARATOR)
    }
}
