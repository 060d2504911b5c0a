//! The navigation controller.
//!
//! [`App`] is the single owner of the [`NavigationStack`], the overlay state
//! and the lifecycle token. It is the only place that creates refresh tasks
//! or mutates the stack, and it only runs on the UI thread.

pub mod input;
pub mod refresh;
pub mod render_queue;
pub mod stack;
pub mod view;

pub use input::{InputDispatcher, KeyAction};
pub use refresh::RefreshTask;
pub use render_queue::{RenderFn, RenderQueue, RenderReceiver};
pub use stack::{NavigationStack, ViewId, BREADCRUMB_SEPARATOR};
pub use view::{ready_refresh, Loaded, NavCommand, Navigator, RefreshFuture, View, ViewContext};

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// A modal surface drawn above the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Error(String),
    Help,
}

/// Navigation controller.
pub struct App {
    stack: NavigationStack,
    lifecycle: CancellationToken,
    render_queue: RenderQueue,
    render_rx: Option<RenderReceiver>,
    nav: Navigator,
    nav_rx: mpsc::UnboundedReceiver<NavCommand>,
    overlay: Option<Overlay>,
    breadcrumb: String,
    shut_down: bool,
    should_quit: bool,
    /// Whether the UI needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let (render_queue, render_rx) = RenderQueue::channel();
        let (nav, nav_rx) = Navigator::channel();
        Self {
            stack: NavigationStack::new(),
            lifecycle: CancellationToken::new(),
            render_queue,
            render_rx: Some(render_rx),
            nav,
            nav_rx,
            overlay: None,
            breadcrumb: String::new(),
            shut_down: false,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Navigation handle to give to views at construction.
    pub fn navigator(&self) -> Navigator {
        self.nav.clone()
    }

    /// Take the receiving end of the render queue. The event loop owns it.
    pub fn take_render_receiver(&mut self) -> Option<RenderReceiver> {
        self.render_rx.take()
    }

    pub fn render_queue(&self) -> RenderQueue {
        self.render_queue.clone()
    }

    // ------------------------------------------------------------------
    // Stack operations
    // ------------------------------------------------------------------

    /// Make `view` the visible screen and start loading its data.
    ///
    /// Returns `None` (dropping the view) after shutdown.
    pub fn push(&mut self, view: Box<dyn View>) -> Option<ViewId> {
        if self.shut_down {
            tracing::debug!(name = %view.name(), "push ignored after shutdown");
            return None;
        }

        let id = self.stack.push(view);
        self.update_breadcrumb();
        tracing::debug!(view = %id, breadcrumb = %self.breadcrumb, "pushed view");

        self.spawn_refresh(id);
        Some(id)
    }

    /// Return to the parent view without reloading it. No-op at the root.
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some((id, _view)) => {
                self.update_breadcrumb();
                tracing::debug!(view = %id, breadcrumb = %self.breadcrumb, "popped view");
                true
            }
            None => false,
        }
    }

    /// Reload the visible view.
    pub fn refresh_current(&mut self) {
        if self.shut_down {
            return;
        }
        if let Some(id) = self.stack.top_id() {
            self.spawn_refresh(id);
        }
    }

    fn spawn_refresh(&mut self, id: ViewId) {
        let Some(view) = self.stack.get(id) else {
            return;
        };
        let task = RefreshTask::new(id, view.name(), self.lifecycle.child_token());
        task.spawn(view.refresh(), self.render_queue.clone());
    }

    fn update_breadcrumb(&mut self) {
        self.breadcrumb = self.stack.breadcrumb();
        self.needs_redraw = true;
    }

    /// Cancel the lifecycle token and stop accepting pushes and refreshes.
    /// Calling it again has no further effect.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.lifecycle.cancel();
        tracing::info!(depth = self.stack.depth(), "shutting down");
    }

    /// Shut down and ask the event loop to exit.
    pub fn quit(&mut self) {
        self.shutdown();
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Render-queue callbacks
    // ------------------------------------------------------------------

    /// Run one queued UI mutation, unless the lifecycle has ended.
    pub fn run_render(&mut self, f: RenderFn) {
        if self.lifecycle.is_cancelled() {
            return;
        }
        f(self);
        self.needs_redraw = true;
    }

    /// Run every closure already waiting in `rx`. Returns how many ran.
    pub fn run_pending(&mut self, rx: &mut RenderReceiver) -> usize {
        let mut ran = 0;
        while let Some(f) = rx.try_next() {
            if !self.lifecycle.is_cancelled() {
                ran += 1;
            }
            self.run_render(f);
        }
        ran
    }

    /// Deliver a successful reload to its view, if still on the stack.
    pub fn complete_refresh(&mut self, id: ViewId, loaded: Loaded) {
        match self.stack.get_mut(id) {
            Some(view) => view.apply(loaded),
            None => tracing::trace!(view = %id, "completion for popped view dropped"),
        }
    }

    /// Show an error overlay, replacing any open overlay.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.overlay = Some(Overlay::Error(message.into()));
        self.needs_redraw = true;
    }

    pub fn show_help(&mut self) {
        self.overlay = Some(Overlay::Help);
        self.needs_redraw = true;
    }

    pub fn dismiss_overlay(&mut self) {
        if self.overlay.take().is_some() {
            self.needs_redraw = true;
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Route one key press, then apply any navigation the view requested.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = InputDispatcher::classify(key, self.stack.depth(), self.overlay.is_some());
        tracing::trace!(?key, ?action, "key");

        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Pop => {
                self.pop();
            }
            KeyAction::Refresh => self.refresh_current(),
            KeyAction::Help => self.show_help(),
            KeyAction::DismissOverlay => self.dismiss_overlay(),
            KeyAction::Ignore => {}
            KeyAction::Forward(key) => {
                if let Some(view) = self.stack.top_mut() {
                    // Unconsumed keys are dropped.
                    let _ = view.handle_input(key);
                }
                self.needs_redraw = true;
            }
        }

        self.process_nav_commands();
    }

    /// Apply pushes and pops queued by views.
    pub fn process_nav_commands(&mut self) {
        while let Ok(command) = self.nav_rx.try_recv() {
            match command {
                NavCommand::Push(view) => {
                    self.push(view);
                }
                NavCommand::Pop => {
                    self.pop();
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn breadcrumb(&self) -> &str {
        &self.breadcrumb
    }

    pub fn top_id(&self) -> Option<ViewId> {
        self.stack.top_id()
    }

    pub fn top_view_mut(&mut self) -> Option<&mut (dyn View + 'static)> {
        self.stack.top_mut()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Text shown in the error overlay, if one is open.
    pub fn overlay_message(&self) -> Option<String> {
        match &self.overlay {
            Some(Overlay::Error(message)) => Some(format!("Error: {}", message)),
            _ => None,
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn lifecycle_token(&self) -> CancellationToken {
        self.lifecycle.clone()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}
