//! The UI event loop.
//!
//! One task owns the [`App`] and the terminal. It multiplexes terminal input
//! and render-queue closures with `tokio::select!`, drains every closure that
//! is already pending before drawing, and redraws only when state changed.

use std::io;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};

use crate::app::App;
use crate::ui;

/// Run the browser against the real terminal input.
pub async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    run_loop(terminal, app, EventStream::new()).await
}

/// Run the browser with `events` as the input source. Returns once the user
/// quits or the input stream ends; the app is shut down either way.
pub async fn run_loop<B, S>(terminal: &mut Terminal<B>, app: &mut App, mut events: S) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    // Take the render receiver from the app (we need ownership for select!)
    let Some(mut render_rx) = app.take_render_receiver() else {
        return Err(color_eyre::eyre::eyre!("event loop is already running"));
    };

    loop {
        // Frame boundary: apply everything workers have finished.
        app.run_pending(&mut render_rx);
        if app.should_quit() {
            break;
        }

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(Event::Resize(width, height))) => {
                    tracing::trace!(width, height, "resize");
                    app.mark_dirty();
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    app.shutdown();
                    return Err(err.into());
                }
                None => {
                    tracing::debug!("input stream closed");
                    app.quit();
                }
            },
            Some(f) = render_rx.recv() => app.run_render(f),
        }

        if app.should_quit() {
            break;
        }
    }

    app.shutdown();
    Ok(())
}
