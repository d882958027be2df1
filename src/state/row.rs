use super::{EditorState, TAB_STOP};
use crate::syntax::{self, Highlight};

/// One line of the document.
///
/// `raw` is what gets saved; `render` is what gets drawn, with tabs expanded
/// to spaces. `highlight` carries one tag per `render` byte and is kept the
/// same length at all times.
#[derive(Debug)]
pub struct Row {
    pub raw: String,
    pub render: String,
    pub highlight: Vec<Highlight>,
    pub open_comment_at_end: bool,
}

impl Row {
    pub fn new(text: impl Into<String>) -> Self {
        let mut row = Self {
            raw: text.into(),
            render: String::new(),
            highlight: Vec::new(),
            open_comment_at_end: false,
        };
        row.rebuild_render();
        row
    }

    /// Expands every tab to spaces up to the next multiple of [`TAB_STOP`].
    fn rebuild_render(&mut self) {
        self.render = String::with_capacity(self.raw.len());
        for ch in self.raw.chars() {
            if ch == '\t' {
                self.render.push(' ');
                while self.render.len() % TAB_STOP != 0 {
                    self.render.push(' ');
                }
            } else {
                self.render.push(ch);
            }
        }
    }

    /// Maps a byte offset in `raw` to the matching byte offset in `render`.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0;
        for &byte in &self.raw.as_bytes()[..cx.min(self.raw.len())] {
            if byte == b'\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// Inverse of [`Self::cx_to_rx`]; offsets inside an expanded tab map back
    /// to the tab itself, and offsets past the end clamp to the raw length.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut current_rx = 0;
        for (cx, &byte) in self.raw.as_bytes().iter().enumerate() {
            if byte == b'\t' {
                current_rx += (TAB_STOP - 1) - (current_rx % TAB_STOP);
            }
            current_rx += 1;
            if current_rx > rx {
                return cx;
            }
        }
        self.raw.len()
    }
}

impl EditorState {
    pub fn insert_row(&mut self, at: usize, text: impl Into<String>) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(text));
        self.update_syntax_from(at);
        self.dirty += 1;
    }

    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        // The row now at `at` has a new predecessor; its comment seed may
        // have changed.
        if at < self.rows.len() {
            self.update_syntax_from(at);
        }
        self.dirty += 1;
    }

    pub fn row_insert_char(&mut self, y: usize, at: usize, ch: char) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        let at = if at > row.raw.len() || !row.raw.is_char_boundary(at) {
            row.raw.len()
        } else {
            at
        };
        row.raw.insert(at, ch);
        self.update_row(y);
        self.dirty += 1;
    }

    pub fn row_delete_char(&mut self, y: usize, at: usize) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        if at >= row.raw.len() || !row.raw.is_char_boundary(at) {
            return;
        }
        row.raw.remove(at);
        self.update_row(y);
        self.dirty += 1;
    }

    /// Splits the row at `at`, moving the tail into a new row below.
    pub fn split_row(&mut self, y: usize, at: usize) {
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        let mut at = at.min(row.raw.len());
        while at > 0 && !row.raw.is_char_boundary(at) {
            at -= 1;
        }
        let tail = row.raw.split_off(at);
        self.rows.insert(y + 1, Row::new(tail));
        self.update_row(y);
        self.update_syntax_from(y + 1);
        self.dirty += 1;
    }

    /// Appends row `y` onto the row above and removes it. Returns the byte
    /// offset of the seam in the joined row.
    pub fn join_with_previous(&mut self, y: usize) -> Option<usize> {
        if y == 0 || y >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(y);
        let seam = self.rows[y - 1].raw.len();
        self.rows[y - 1].raw.push_str(&removed.raw);
        self.update_row(y - 1);
        self.dirty += 1;
        Some(seam)
    }

    /// Serializes the document for saving, one trailing newline per row.
    pub fn rows_to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for row in &self.rows {
            bytes.extend_from_slice(row.raw.as_bytes());
            bytes.push(b'\n');
        }
        bytes
    }

    fn update_row(&mut self, y: usize) {
        self.rows[y].rebuild_render();
        self.update_syntax_from(y);
    }

    /// Re-tags row `y` and walks forward while a row's comment exit state
    /// flips, so an opened or closed block comment propagates exactly as far
    /// as it reaches.
    pub(super) fn update_syntax_from(&mut self, y: usize) {
        let mut at = y;
        while at < self.rows.len() {
            let starts_in_comment = at > 0 && self.rows[at - 1].open_comment_at_end;
            let (tags, open_at_end) =
                syntax::scan_row(&self.rows[at].render, starts_in_comment, self.syntax);
            self.rows[at].highlight = tags;
            let changed = self.rows[at].open_comment_at_end != open_at_end;
            self.rows[at].open_comment_at_end = open_at_end;
            if !changed {
                break;
            }
            at += 1;
        }
    }
}
