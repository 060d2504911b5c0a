//! Terminal setup and teardown functions.
//!
//! Low-level helpers used by `TerminalManager` and the panic hook.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and hide the cursor.
///
/// Raw mode is enabled separately by the caller.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal after a panic. Ignores all errors.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
