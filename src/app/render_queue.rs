//! Single-writer serialization of UI mutations.
//!
//! Anything that changes what is on screen as the result of background work
//! is wrapped in a closure and sent here. The event loop runs the closures on
//! the UI thread, in submission order, between key events.

use tokio::sync::mpsc;

use super::App;

/// A deferred UI mutation.
pub type RenderFn = Box<dyn FnOnce(&mut App) + Send + 'static>;

/// Sending half, cloned into every refresh task.
#[derive(Clone)]
pub struct RenderQueue {
    tx: mpsc::UnboundedSender<RenderFn>,
}

/// Receiving half, owned by the event loop.
pub struct RenderReceiver {
    rx: mpsc::UnboundedReceiver<RenderFn>,
}

impl RenderQueue {
    pub fn channel() -> (RenderQueue, RenderReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (RenderQueue { tx }, RenderReceiver { rx })
    }

    /// Schedule `f` to run on the UI thread. Returns `false` if the event
    /// loop has gone away, in which case `f` is dropped unrun.
    pub fn enqueue<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut App) + Send + 'static,
    {
        self.tx.send(Box::new(f)).is_ok()
    }
}

impl RenderReceiver {
    /// Next queued closure, if one is ready.
    pub fn try_next(&mut self) -> Option<RenderFn> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next closure. `None` once every sender is dropped.
    pub async fn recv(&mut self) -> Option<RenderFn> {
        self.rx.recv().await
    }
}
