//! Terminal cleanup guard.
//!
//! Raw mode and the alternate screen must be torn down no matter how the
//! process exits; a panic that leaves the terminal in raw mode makes the
//! shell unusable. The guard restores both on drop as a safety net behind
//! the explicit cleanup in `main`.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Restores terminal state on drop. Create after terminal setup and keep
/// alive for the whole session.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic, and there is nothing
        // useful to do if restoration fails.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
