//! The select! loop driven by scripted terminal events on a TestBackend.

mod common;

use std::io;
use std::time::Duration;

use common::fake_view;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
};
use futures::channel::mpsc;
use hbtui::app::App;
use hbtui::run::run_loop;
use ratatui::{backend::TestBackend, Terminal};

fn press(code: KeyCode) -> io::Result<Event> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn release(code: KeyCode) -> io::Result<Event> {
    Ok(Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    }))
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_q_at_root_exits_the_loop() {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    let mut app = App::new();
    let (root, handle) = fake_view("Accounts");
    app.push(root);

    let (tx, rx) = mpsc::unbounded();
    tx.unbounded_send(press(KeyCode::Char('q'))).unwrap();

    tokio::time::timeout(Duration::from_secs(2), run_loop(&mut terminal, &mut app, rx))
        .await
        .expect("loop exits")
        .unwrap();

    assert!(app.should_quit());
    assert!(app.is_shut_down());
    assert!(app.lifecycle_token().is_cancelled());
    assert!(handle.refresh_count() >= 1);
}

#[tokio::test]
async fn test_loop_applies_completions_and_redraws() {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    let mut app = App::new();
    let (root, handle) = fake_view("Accounts");
    let gate = handle.gate();
    app.push(root);

    let (tx, rx) = mpsc::unbounded();
    let driver = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        gate.send(Ok("three accounts".into())).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        // A resize forces another pass through the loop after the completion.
        tx.unbounded_send(Ok(Event::Resize(80, 12))).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.unbounded_send(press(KeyCode::Char('q'))).unwrap();
    };

    let (result, ()) = tokio::join!(
        tokio::time::timeout(Duration::from_secs(2), run_loop(&mut terminal, &mut app, rx)),
        driver
    );
    result.expect("loop exits").unwrap();

    assert_eq!(handle.applied(), vec!["three accounts"]);
    let text = screen(&terminal);
    assert!(text.contains("Honeybadger │ Accounts"));
    assert!(text.contains("Accounts shows three accounts"));
}

#[tokio::test]
async fn test_key_releases_are_ignored() {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    let mut app = App::new();
    app.push(fake_view("Root").0);
    app.push(fake_view("Child").0);

    let (tx, rx) = mpsc::unbounded();
    tx.unbounded_send(release(KeyCode::Esc)).unwrap();
    tx.unbounded_send(press(KeyCode::Char('?'))).unwrap();
    drop(tx);

    tokio::time::timeout(Duration::from_secs(2), run_loop(&mut terminal, &mut app, rx))
        .await
        .expect("loop exits")
        .unwrap();

    // The release did not pop; the stream ending quit the loop.
    assert_eq!(app.depth(), 2);
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_input_error_shuts_down_and_propagates() {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    let mut app = App::new();
    app.push(fake_view("Root").0);

    let (tx, rx) = mpsc::unbounded();
    tx.unbounded_send(Err(io::Error::new(io::ErrorKind::Other, "tty gone")))
        .unwrap();

    let result = tokio::time::timeout(Duration::from_secs(2), run_loop(&mut terminal, &mut app, rx))
        .await
        .expect("loop exits");

    assert!(result.is_err());
    assert!(app.is_shut_down());
}

#[tokio::test]
async fn test_loop_cannot_run_twice() {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    let mut app = App::new();
    app.push(fake_view("Root").0);

    let (tx, rx) = mpsc::unbounded();
    tx.unbounded_send(press(KeyCode::Char('q'))).unwrap();
    run_loop(&mut terminal, &mut app, rx).await.unwrap();

    let (_tx, rx) = mpsc::unbounded::<io::Result<Event>>();
    assert!(run_loop(&mut terminal, &mut app, rx).await.is_err());
}
