//! Terminal mode restoration.

use std::io::Write;

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use tracing::{debug, warn};

/// Restores the terminal on drop.
///
/// Create it right after raw mode is enabled so every later exit path,
/// including a failed setup step, leaves the terminal usable. Each restore
/// step runs even if an earlier one fails.
pub struct TerminalGuard<W: Write> {
    out: W,
    mouse: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Arms the guard; `mouse` says whether mouse capture must be released.
    pub fn new(out: W, mouse: bool) -> Self {
        Self { out, mouse }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if self.mouse
            && let Err(e) = execute!(self.out, DisableMouseCapture)
        {
            warn!(error = %e, "Failed to disable mouse capture");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";
    const DISABLE_MOUSE_TRACKING: &str = "\x1b[?1000l";

    #[test]
    fn test_drop_restores_screen_and_cursor() {
        let mut out = Vec::new();
        drop(TerminalGuard::new(&mut out, false));

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(written.contains(SHOW_CURSOR));
        assert!(!written.contains(DISABLE_MOUSE_TRACKING));
    }

    #[test]
    fn test_drop_releases_mouse_when_captured() {
        let mut out = Vec::new();
        drop(TerminalGuard::new(&mut out, true));

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(DISABLE_MOUSE_TRACKING));
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
    }

    #[test]
    fn test_restores_when_setup_fails_early() {
        fn failing_setup(out: &mut Vec<u8>) -> std::io::Result<()> {
            let _guard = TerminalGuard::new(out, true);
            Err(std::io::Error::other("alternate screen unavailable"))
        }

        let mut out = Vec::new();
        assert!(failing_setup(&mut out).is_err());
        assert!(String::from_utf8(out).unwrap().contains(LEAVE_ALTERNATE_SCREEN));
    }
}
