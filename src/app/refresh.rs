//! One asynchronous reload of one view.

use std::time::Instant;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::render_queue::RenderQueue;
use super::stack::ViewId;
use super::view::RefreshFuture;

/// A single `refresh()` call, run off the UI thread and reported back through
/// the render queue exactly once.
///
/// The lifecycle token is checked before starting and again before enqueuing
/// the completion; a cancelled task finishes silently.
#[derive(Debug)]
pub struct RefreshTask {
    view_id: ViewId,
    view_name: String,
    token: CancellationToken,
    started: Instant,
}

impl RefreshTask {
    pub fn new(view_id: ViewId, view_name: String, token: CancellationToken) -> Self {
        Self {
            view_id,
            view_name,
            token,
            started: Instant::now(),
        }
    }

    /// Run `work` on the runtime. Returns `None` without spawning if the
    /// lifecycle token is already cancelled.
    pub fn spawn(self, work: RefreshFuture, queue: RenderQueue) -> Option<JoinHandle<()>> {
        if self.token.is_cancelled() {
            tracing::trace!(view = %self.view_id, "refresh skipped after shutdown");
            return None;
        }

        tracing::debug!(view = %self.view_id, name = %self.view_name, "refresh started");
        Some(tokio::spawn(self.run(work, queue)))
    }

    async fn run(self, work: RefreshFuture, queue: RenderQueue) {
        let result = tokio::select! {
            _ = self.token.cancelled() => {
                tracing::trace!(view = %self.view_id, "refresh abandoned at shutdown");
                return;
            }
            result = work => result,
        };

        if self.token.is_cancelled() {
            tracing::trace!(view = %self.view_id, "refresh completion dropped after shutdown");
            return;
        }

        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let view_id = self.view_id;

        match result {
            Ok(loaded) => {
                tracing::debug!(view = %view_id, name = %self.view_name, elapsed_ms, "refresh completed");
                queue.enqueue(move |app| app.complete_refresh(view_id, loaded));
            }
            Err(err) => {
                tracing::warn!(
                    view = %view_id,
                    name = %self.view_name,
                    elapsed_ms,
                    code = err.code(),
                    "refresh failed: {}",
                    err
                );
                let message = err.to_string();
                queue.enqueue(move |app| app.show_error(message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::stack::NavigationStack;
    use crate::app::view::{ready_refresh, Loaded, View};
    use crate::app::App;
    use crate::error::ClientError;
    use crate::traits::HttpError;
    use crossterm::event::KeyEvent;
    use ratatui::{layout::Rect, Frame};

    struct Stub;

    impl View for Stub {
        fn name(&self) -> String {
            "Stub".to_string()
        }
        fn render(&mut self, _frame: &mut Frame, _area: Rect) {}
        fn refresh(&self) -> RefreshFuture {
            ready_refresh()
        }
        fn apply(&mut self, _loaded: Loaded) {}
        fn handle_input(&mut self, key: KeyEvent) -> Option<KeyEvent> {
            Some(key)
        }
    }

    fn stub_id() -> ViewId {
        NavigationStack::new().push(Box::new(Stub))
    }

    fn ok_work() -> RefreshFuture {
        Box::pin(async { Ok::<Loaded, ClientError>(Box::new(vec![1u8])) })
    }

    #[tokio::test]
    async fn test_cancelled_token_skips_spawn() {
        let (queue, mut rx) = RenderQueue::channel();
        let token = CancellationToken::new();
        token.cancel();

        let handle = RefreshTask::new(stub_id(), "Stub".into(), token).spawn(ok_work(), queue);

        assert!(handle.is_none());
        assert!(rx.try_next().is_none());
    }

    #[tokio::test]
    async fn test_success_enqueues_exactly_one_closure() {
        let (queue, mut rx) = RenderQueue::channel();

        let handle = RefreshTask::new(stub_id(), "Stub".into(), CancellationToken::new())
            .spawn(ok_work(), queue)
            .unwrap();
        handle.await.unwrap();

        assert!(rx.try_next().is_some());
        assert!(rx.try_next().is_none());
    }

    #[tokio::test]
    async fn test_failure_enqueues_error_overlay() {
        let (queue, mut rx) = RenderQueue::channel();
        let mut app = App::new();

        let work: RefreshFuture = Box::pin(async {
            Err::<Loaded, _>(ClientError::Http(HttpError::ConnectionFailed(
                "refused".into(),
            )))
        });
        RefreshTask::new(stub_id(), "Stub".into(), CancellationToken::new())
            .spawn(work, queue)
            .unwrap()
            .await
            .unwrap();

        let f = rx.try_next().unwrap();
        f(&mut app);
        assert_eq!(
            app.overlay_message().as_deref(),
            Some("Error: Connection failed: refused")
        );
    }

    #[tokio::test]
    async fn test_cancel_while_in_flight_drops_completion() {
        let (queue, mut rx) = RenderQueue::channel();
        let token = CancellationToken::new();
        let (tx, gate) = tokio::sync::oneshot::channel::<()>();

        let work: RefreshFuture = Box::pin(async move {
            let _ = gate.await;
            Ok::<Loaded, ClientError>(Box::new(()))
        });

        let handle = RefreshTask::new(stub_id(), "Stub".into(), token.clone())
            .spawn(work, queue)
            .unwrap();
        token.cancel();
        let _ = tx.send(());
        handle.await.unwrap();

        assert!(rx.try_next().is_none());
    }
}
