use std::io;

use crossterm::cursor::{MoveTo, Show};
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use tracing::error;

/// Scoped raw-mode acquisition. Dropping the session restores cooked mode
/// and leaves a clean screen on every exit path, including unwinds.
pub struct TerminalSession;

impl TerminalSession {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0), Show) {
            error!("reset screen on exit failed: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            error!("restore terminal mode failed: {}", err);
        }
    }
}
