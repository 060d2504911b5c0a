//! Navigation stack behavior as seen through the controller: push, pop,
//! back keys, quit keys and breadcrumbs.

mod common;

use common::{fake_view, Harness};
use crossterm::event::KeyCode;

#[tokio::test]
async fn test_push_root_shows_loaded_data_and_breadcrumb() {
    let mut h = Harness::new();
    let (root, handle) = fake_view("Accounts");

    h.app.push(root);
    assert!(h.next_render().await);

    assert_eq!(h.app.breadcrumb(), "Accounts");
    assert_eq!(handle.applied(), vec!["Accounts data"]);
    let rows = h.screen(80, 10);
    assert!(rows[0].starts_with(" Honeybadger │ Accounts"));
    assert!(rows[1].starts_with("Accounts shows Accounts data"));
}

#[tokio::test]
async fn test_pop_at_root_is_a_noop() {
    let mut h = Harness::new();
    let (root, _) = fake_view("Accounts");
    let root_id = h.app.push(root).unwrap();
    h.settle().await;

    assert!(!h.app.pop());
    h.key(KeyCode::Esc);
    h.key(KeyCode::Left);

    assert_eq!(h.app.depth(), 1);
    assert_eq!(h.app.top_id(), Some(root_id));
    assert_eq!(h.app.breadcrumb(), "Accounts");
    assert!(!h.app.should_quit());
}

#[tokio::test]
async fn test_child_pop_restores_cached_parent_without_reload() {
    let mut h = Harness::new();
    let (root, root_handle) = fake_view("Root");
    let (child, child_handle) = fake_view("Child");

    h.app.push(root);
    h.settle().await;
    h.app.push(child);
    h.settle().await;

    assert_eq!(h.app.breadcrumb(), "Root > Child");
    assert_eq!(child_handle.refresh_count(), 1);

    h.key(KeyCode::Esc);
    h.settle().await;

    assert_eq!(h.app.breadcrumb(), "Root");
    assert_eq!(root_handle.refresh_count(), 1);
    assert_eq!(root_handle.applied(), vec!["Root data"]);
    assert!(h.screen_text().contains("Root shows Root data"));
}

#[tokio::test]
async fn test_breadcrumb_tracks_every_push_and_pop() {
    let mut h = Harness::new();
    let names = ["Accounts", "Acme", "Projects", "Web", "Faults"];

    for (depth, name) in names.iter().enumerate() {
        h.app.push(fake_view(name).0);
        assert_eq!(h.app.breadcrumb(), names[..=depth].join(" > "));
    }

    for depth in (1..names.len()).rev() {
        h.key(KeyCode::Left);
        assert_eq!(h.app.breadcrumb(), names[..depth].join(" > "));
    }
}

#[tokio::test]
async fn test_random_push_pop_sequences_never_empty_the_stack() {
    let mut h = Harness::new();
    h.app.push(fake_view("Root").0);

    // Deterministic xorshift so failures reproduce.
    let mut seed: u32 = 0x9e37_79b9;
    let mut expected_depth = 1usize;
    for step in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        if seed % 3 == 0 {
            h.app.push(fake_view(&format!("V{}", step)).0);
            expected_depth += 1;
        } else {
            let popped = h.app.pop();
            assert_eq!(popped, expected_depth > 1);
            expected_depth = expected_depth.saturating_sub(1).max(1);
        }

        assert_eq!(h.app.depth(), expected_depth);
        assert_eq!(h.app.breadcrumb().split(" > ").count(), expected_depth);
        assert!(h.app.breadcrumb().starts_with("Root"));
    }
    h.app.shutdown();
}

#[tokio::test]
async fn test_q_pops_below_root_and_quits_at_root() {
    let mut h = Harness::new();
    h.app.push(fake_view("Root").0);
    h.app.push(fake_view("Child").0);

    h.key(KeyCode::Char('q'));
    assert_eq!(h.app.depth(), 1);
    assert!(!h.app.should_quit());

    h.key(KeyCode::Char('q'));
    assert!(h.app.should_quit());
    assert!(h.app.is_shut_down());
}

#[tokio::test]
async fn test_ctrl_c_quits_at_any_depth() {
    let mut h = Harness::new();
    h.app.push(fake_view("Root").0);
    h.app.push(fake_view("Child").0);
    h.app.push(fake_view("Grandchild").0);

    h.ctrl('c');
    assert!(h.app.should_quit());
    assert_eq!(h.app.depth(), 3);
}

#[tokio::test]
async fn test_global_keys_are_not_forwarded_to_views() {
    let mut h = Harness::new();
    let (root, handle) = fake_view("Root");
    h.app.push(root);
    h.settle().await;

    h.key(KeyCode::Char('r'));
    h.key(KeyCode::Char('?'));
    h.key(KeyCode::Char('x'));
    h.key(KeyCode::Char('j'));

    // '?' opened help, so 'x' dismissed it and only 'j' reached the view.
    let codes: Vec<KeyCode> = handle.keys().iter().map(|k| k.code).collect();
    assert_eq!(codes, vec![KeyCode::Char('j')]);
}

#[tokio::test]
async fn test_push_after_shutdown_is_ignored() {
    let mut h = Harness::new();
    h.app.push(fake_view("Root").0);
    h.app.shutdown();

    let (late, handle) = fake_view("Late");
    assert!(h.app.push(late).is_none());
    assert_eq!(h.app.depth(), 1);
    assert_eq!(handle.refresh_count(), 0);
}
