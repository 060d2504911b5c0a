//! Common test utilities for integration tests.
//!
//! [`fake_view`] builds a view whose refreshes are scripted: each call to
//! `refresh()` takes the next gate queued with [`FakeHandle::gate`] and waits
//! for the test to complete it, or finishes immediately when no gate is
//! queued. [`Harness`] owns an [`App`] plus its render receiver so a test can
//! step the frame boundary by hand.
//!
//! ```ignore
//! let (view, handle) = fake_view("Root");
//! let gate = handle.gate();
//! let mut h = Harness::new();
//! h.app.push(view);
//! gate.send(Ok("loaded".into())).unwrap();
//! assert!(h.next_render().await);
//! assert_eq!(handle.applied(), vec!["loaded"]);
//! ```

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hbtui::adapters::MockHttpClient;
use hbtui::api::DataClient;
use hbtui::app::{App, Loaded, RefreshFuture, RenderReceiver, View, ViewContext};
use hbtui::error::ClientError;
use hbtui::ui;
use ratatui::{
    backend::TestBackend,
    layout::Rect,
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::oneshot;

pub type Gate = oneshot::Sender<Result<String, ClientError>>;

/// How long a test waits for a render closure before giving up.
pub const RENDER_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Clone, Default)]
pub struct FakeHandle {
    gates: Arc<Mutex<VecDeque<oneshot::Receiver<Result<String, ClientError>>>>>,
    applied: Arc<Mutex<Vec<String>>>,
    keys: Arc<Mutex<Vec<KeyEvent>>>,
    refreshes: Arc<AtomicUsize>,
}

impl FakeHandle {
    /// Queue a gate for the next refresh. Complete it to finish that refresh.
    pub fn gate(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    /// Payloads applied so far, oldest first.
    pub fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }

    /// The payload currently displayed.
    pub fn current(&self) -> Option<String> {
        self.applied.lock().unwrap().last().cloned()
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    /// Keys the view received through `handle_input`.
    pub fn keys(&self) -> Vec<KeyEvent> {
        self.keys.lock().unwrap().clone()
    }
}

pub struct FakeView {
    name: String,
    handle: FakeHandle,
}

impl View for FakeView {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = match self.handle.current() {
            Some(data) => format!("{} shows {}", self.name, data),
            None => format!("{} is loading", self.name),
        };
        frame.render_widget(Paragraph::new(text), area);
    }

    fn refresh(&self) -> RefreshFuture {
        self.handle.refreshes.fetch_add(1, Ordering::SeqCst);
        let gate = self.handle.gates.lock().unwrap().pop_front();
        let default = format!("{} data", self.name);
        Box::pin(async move {
            let result = match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ClientError::Decode("gate dropped".into()))),
                None => Ok(default),
            };
            result.map(|data| Box::new(data) as Loaded)
        })
    }

    fn apply(&mut self, loaded: Loaded) {
        if let Ok(data) = loaded.downcast::<String>() {
            self.handle.applied.lock().unwrap().push(*data);
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Option<KeyEvent> {
        self.handle.keys.lock().unwrap().push(key);
        None
    }
}

pub fn fake_view(name: &str) -> (Box<dyn View>, FakeHandle) {
    let handle = FakeHandle::default();
    let view = FakeView {
        name: name.to_string(),
        handle: handle.clone(),
    };
    (Box::new(view), handle)
}

/// An App with its render receiver taken out, stepped by hand.
pub struct Harness {
    pub app: App,
    rx: RenderReceiver,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        let mut app = App::new();
        let rx = app
            .take_render_receiver()
            .expect("fresh app has a render receiver");
        Self { app, rx }
    }

    /// Wait for the next queued closure and run it. `false` on timeout.
    pub async fn next_render(&mut self) -> bool {
        match tokio::time::timeout(RENDER_TIMEOUT, self.rx.recv()).await {
            Ok(Some(f)) => {
                self.app.run_render(f);
                true
            }
            _ => false,
        }
    }

    /// Wait briefly for closures that may still be in flight and run them.
    pub async fn settle(&mut self) {
        while let Ok(Some(f)) =
            tokio::time::timeout(Duration::from_millis(50), self.rx.recv()).await
        {
            self.app.run_render(f);
        }
    }

    /// Run every closure already queued.
    pub fn drain(&mut self) -> usize {
        self.app.run_pending(&mut self.rx)
    }

    pub fn key(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn ctrl(&mut self, c: char) {
        self.app
            .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    /// Render the whole UI and return it row by row.
    pub fn screen(&mut self, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui::render(f, &mut self.app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    pub fn screen_text(&mut self) -> String {
        self.screen(100, 30).join("\n")
    }
}

/// A data client over a [`MockHttpClient`] rooted at `http://hb.test`.
pub fn mock_client(http: &MockHttpClient) -> Arc<DataClient> {
    Arc::new(DataClient::new(
        Arc::new(http.clone()),
        "http://hb.test",
        "test-token",
    ))
}

/// Harness plus a view context wired to `http`.
pub fn harness_with_client(http: &MockHttpClient) -> (Harness, ViewContext) {
    let harness = Harness::new();
    let ctx = ViewContext::new(mock_client(http), harness.app.navigator());
    (harness, ctx)
}
