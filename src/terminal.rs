//! Terminal setup and teardown around the TUI session.

use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode},
};
use std::io::{self, Write};

/// Switch `out` to the alternate screen with the cursor hidden.
pub fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, cursor::Hide)
}

/// Undo [`enter_screen`]: leave the alternate screen and show the cursor.
pub fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Best-effort restore used on every exit path, including errors and panics.
pub fn restore(out: &mut impl Write) {
    let _ = disable_raw_mode();
    let _ = leave_screen(out);
}
