//! Global key classification.
//!
//! | Key | Depth | Action |
//! |-----|-------|--------|
//! | Ctrl+C | any | quit |
//! | `q` | 1 | quit |
//! | `q` | > 1 | pop |
//! | Esc, ← | > 1 | pop |
//! | Esc, ← | 1 | nothing (consumed) |
//! | `r` | any | refresh current view |
//! | `?` | any | help overlay |
//! | other | any | forwarded to the top view |
//!
//! While an overlay is open, Ctrl+C still quits and every other key only
//! dismisses the overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the controller should do with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Pop,
    Refresh,
    Help,
    DismissOverlay,
    /// Swallowed without effect.
    Ignore,
    Forward(KeyEvent),
}

/// Stateless router from key events to [`KeyAction`]s.
pub struct InputDispatcher;

impl InputDispatcher {
    pub fn classify(key: KeyEvent, depth: usize, overlay_open: bool) -> KeyAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }

        if overlay_open {
            return KeyAction::DismissOverlay;
        }

        // Global letters only apply without Ctrl/Alt so views can bind chords.
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('q') if plain => {
                if depth <= 1 {
                    KeyAction::Quit
                } else {
                    KeyAction::Pop
                }
            }
            KeyCode::Esc | KeyCode::Left => {
                if depth > 1 {
                    KeyAction::Pop
                } else {
                    KeyAction::Ignore
                }
            }
            KeyCode::Char('r') if plain => KeyAction::Refresh,
            KeyCode::Char('?') if plain => KeyAction::Help,
            _ => KeyAction::Forward(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_depends_on_depth() {
        assert_eq!(
            InputDispatcher::classify(key(KeyCode::Char('q')), 1, false),
            KeyAction::Quit
        );
        assert_eq!(
            InputDispatcher::classify(key(KeyCode::Char('q')), 3, false),
            KeyAction::Pop
        );
    }

    #[test]
    fn test_back_keys_are_noop_at_root() {
        for code in [KeyCode::Esc, KeyCode::Left] {
            assert_eq!(InputDispatcher::classify(key(code), 1, false), KeyAction::Ignore);
            assert_eq!(InputDispatcher::classify(key(code), 2, false), KeyAction::Pop);
        }
    }

    #[test]
    fn test_refresh_and_help_at_any_depth() {
        for depth in 1..4 {
            assert_eq!(
                InputDispatcher::classify(key(KeyCode::Char('r')), depth, false),
                KeyAction::Refresh
            );
            assert_eq!(
                InputDispatcher::classify(
                    KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
                    depth,
                    false
                ),
                KeyAction::Help
            );
        }
    }

    #[test]
    fn test_ctrl_c_quits_at_any_depth_and_over_overlays() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(InputDispatcher::classify(ctrl_c, 1, false), KeyAction::Quit);
        assert_eq!(InputDispatcher::classify(ctrl_c, 4, false), KeyAction::Quit);
        assert_eq!(InputDispatcher::classify(ctrl_c, 2, true), KeyAction::Quit);
    }

    #[test]
    fn test_overlay_swallows_everything_else() {
        for code in [KeyCode::Char('q'), KeyCode::Esc, KeyCode::Char('j'), KeyCode::Enter] {
            assert_eq!(
                InputDispatcher::classify(key(code), 2, true),
                KeyAction::DismissOverlay
            );
        }
    }

    #[test]
    fn test_other_keys_are_forwarded() {
        for code in [KeyCode::Char('j'), KeyCode::Enter, KeyCode::Right, KeyCode::Char('h')] {
            assert_eq!(
                InputDispatcher::classify(key(code), 2, false),
                KeyAction::Forward(key(code))
            );
        }
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(
            InputDispatcher::classify(ctrl_r, 1, false),
            KeyAction::Forward(ctrl_r)
        );
    }
}
