//! The View contract and the capabilities handed to every view.
//!
//! A view's reload is split in two halves so that worker tasks never touch UI
//! state: [`View::refresh`] builds a `'static` future that performs the
//! network I/O and yields an opaque [`Loaded`] payload, and [`View::apply`]
//! installs that payload on the UI thread from inside a render-queue closure.

use std::any::Any;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use futures::future::BoxFuture;
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use crate::api::DataClient;
use crate::error::ClientError;

/// Data produced by a successful refresh, downcast by the view that made it.
pub type Loaded = Box<dyn Any + Send>;

/// The off-thread half of a refresh.
pub type RefreshFuture = BoxFuture<'static, Result<Loaded, ClientError>>;

/// A single interactive screen.
///
/// The controller only ever talks to views through this trait.
pub trait View: Send {
    /// Breadcrumb label.
    fn name(&self) -> String;

    /// Draw the view's current data into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Start a reload. The returned future may run on any worker thread and
    /// must not borrow the view.
    fn refresh(&self) -> RefreshFuture;

    /// Replace the view's data with a completed reload. UI thread only.
    fn apply(&mut self, loaded: Loaded);

    /// Handle a key that no global binding claimed. Return `None` when
    /// consumed, `Some(key)` to leave it unhandled.
    fn handle_input(&mut self, key: KeyEvent) -> Option<KeyEvent>;
}

/// A refresh future that succeeds immediately with nothing to apply.
pub fn ready_refresh() -> RefreshFuture {
    Box::pin(futures::future::ready(Ok(Box::new(()) as Loaded)))
}

/// Navigation requested by a view.
pub enum NavCommand {
    Push(Box<dyn View>),
    Pop,
}

impl std::fmt::Debug for NavCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavCommand::Push(view) => write!(f, "Push({})", view.name()),
            NavCommand::Pop => write!(f, "Pop"),
        }
    }
}

/// Handle through which views ask the controller to push or pop.
///
/// Requests are queued and applied by the controller on the UI thread after
/// the current key has been dispatched; views never touch the stack.
#[derive(Clone)]
pub struct Navigator {
    tx: mpsc::UnboundedSender<NavCommand>,
}

impl Navigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NavCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn push(&self, view: Box<dyn View>) {
        // Fails only once the controller is gone.
        let _ = self.tx.send(NavCommand::Push(view));
    }

    pub fn pop(&self) {
        let _ = self.tx.send(NavCommand::Pop);
    }
}

/// Everything a view needs from the outside world, passed at construction.
#[derive(Clone)]
pub struct ViewContext {
    pub client: Arc<DataClient>,
    pub nav: Navigator,
}

impl ViewContext {
    pub fn new(client: Arc<DataClient>, nav: Navigator) -> Self {
        Self { client, nav }
    }
}
