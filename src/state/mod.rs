use std::path::PathBuf;
use std::time::{Duration, Instant};

mod edit;
mod row;
mod search;

pub use row::Row;
pub use search::PromptSignal;

use crate::syntax::{self, SyntaxProfile};
use search::SearchState;

pub const TAB_STOP: usize = 8;
pub const QUIT_CONFIRM_TIMES: u32 = 3;

const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Transient status-bar message; it expires at render time rather than
/// being cleared by a timer.
#[derive(Debug)]
pub struct StatusMessage {
    text: String,
    since: Instant,
}

impl StatusMessage {
    fn new() -> Self {
        Self {
            text: String::new(),
            since: Instant::now(),
        }
    }

    pub fn visible_text(&self) -> Option<&str> {
        if self.text.is_empty() || self.since.elapsed() >= MESSAGE_TIMEOUT {
            return None;
        }
        Some(&self.text)
    }
}

/// The single authoritative editor state: document, cursor, viewport and
/// session bookkeeping. Owned exclusively by the command loop.
#[derive(Debug)]
pub struct EditorState {
    pub rows: Vec<Row>,
    pub cursor_x: usize,
    pub cursor_y: usize,
    pub render_x: usize,
    pub row_offset: usize,
    pub col_offset: usize,
    pub screen_rows: usize,
    pub screen_cols: usize,
    pub dirty: u32,
    pub filename: Option<PathBuf>,
    pub syntax: Option<&'static SyntaxProfile>,
    pub status: StatusMessage,
    pub quit_confirms_left: u32,
    pub(crate) search: SearchState,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            cursor_x: 0,
            cursor_y: 0,
            render_x: 0,
            row_offset: 0,
            col_offset: 0,
            screen_rows: 0,
            screen_cols: 0,
            dirty: 0,
            filename: None,
            syntax: None,
            status: StatusMessage::new(),
            quit_confirms_left: QUIT_CONFIRM_TIMES,
            search: SearchState::new(),
        }
    }

    /// The two bottom terminal rows are reserved for the status and message
    /// bars.
    pub fn resize_viewport(&mut self, width: usize, height: usize) {
        self.screen_cols = width;
        self.screen_rows = height.saturating_sub(2);
    }

    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.status = StatusMessage {
            text: text.into(),
            since: Instant::now(),
        };
    }

    /// Binds a filename, picks the matching syntax profile and re-tags the
    /// whole document under it.
    pub fn set_filename(&mut self, path: PathBuf) {
        self.syntax = syntax::profile_for_path(&path);
        self.filename = Some(path);
        for y in 0..self.rows.len() {
            self.update_syntax_from(y);
        }
    }

    /// Replaces the document with freshly loaded lines and clears the dirty
    /// counter.
    pub fn open_rows(&mut self, path: PathBuf, lines: Vec<String>) {
        self.rows.clear();
        self.set_filename(path);
        for line in lines {
            let at = self.rows.len();
            self.insert_row(at, line);
        }
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.row_offset = 0;
        self.col_offset = 0;
        self.dirty = 0;
    }

    /// Clamps the scroll offsets so the cursor stays inside the viewport.
    pub fn scroll(&mut self) {
        self.render_x = match self.rows.get(self.cursor_y) {
            Some(row) => row.cx_to_rx(self.cursor_x),
            None => 0,
        };

        // A viewport dimension can collapse to zero on a tiny terminal; the
        // lower-bound adjustment would then push the offset past the cursor.
        if self.cursor_y < self.row_offset {
            self.row_offset = self.cursor_y;
        }
        if self.screen_rows > 0 && self.cursor_y >= self.row_offset + self.screen_rows {
            self.row_offset = (self.cursor_y + 1).saturating_sub(self.screen_rows);
        }
        if self.render_x < self.col_offset {
            self.col_offset = self.render_x;
        }
        if self.screen_cols > 0 && self.render_x >= self.col_offset + self.screen_cols {
            self.col_offset = (self.render_x + 1).saturating_sub(self.screen_cols);
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
