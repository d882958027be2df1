mod terminal_session;

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::state::EditorState;
use crate::syntax::Highlight;
pub(crate) use terminal_session::TerminalSession;

/// Composes each frame into one growable buffer and flushes it with a
/// single write, so no partially drawn state is ever visible.
pub struct Renderer {
    frame: Vec<u8>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { frame: Vec::new() }
    }

    pub fn render(&mut self, state: &mut EditorState, out: &mut impl Write) -> io::Result<()> {
        state.scroll();

        self.frame.clear();
        queue!(self.frame, Hide, MoveTo(0, 0))?;

        self.draw_rows(state)?;
        self.draw_status_bar(state)?;
        self.draw_message_bar(state)?;

        let cursor_row = (state.cursor_y - state.row_offset) as u16;
        let cursor_col = (state.render_x - state.col_offset) as u16;
        queue!(self.frame, MoveTo(cursor_col, cursor_row), Show)?;

        out.write_all(&self.frame)?;
        out.flush()
    }

    fn draw_rows(&mut self, state: &EditorState) -> io::Result<()> {
        for y in 0..state.screen_rows {
            let file_row = y + state.row_offset;
            match state.rows.get(file_row) {
                Some(row) => self.draw_text_row(state, file_row, row.render.as_str())?,
                None if state.rows.is_empty() && y == state.screen_rows / 3 => {
                    self.draw_welcome(state)?;
                }
                None => queue!(self.frame, Print("~"))?,
            }
            queue!(self.frame, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
        }
        Ok(())
    }

    /// Emits the visible slice of one row, merging runs of equal tags so a
    /// color command is only produced on tag transitions.
    fn draw_text_row(&mut self, state: &EditorState, file_row: usize, render: &str) -> io::Result<()> {
        let highlight = &state.rows[file_row].highlight;
        let mut current_color: Option<Color> = None;
        let mut drawn = 0;

        for (idx, ch) in render.char_indices() {
            if idx < state.col_offset {
                continue;
            }
            if drawn >= state.screen_cols {
                break;
            }
            drawn += 1;

            if ch.is_control() {
                let glyph = if (ch as u32) <= 26 {
                    (b'@' + ch as u8) as char
                } else {
                    '?'
                };
                queue!(
                    self.frame,
                    SetAttribute(Attribute::Reverse),
                    Print(glyph),
                    SetAttribute(Attribute::Reset)
                )?;
                // Attribute reset also dropped the color run.
                if let Some(color) = current_color {
                    queue!(self.frame, SetForegroundColor(color))?;
                }
                continue;
            }

            match highlight[idx] {
                Highlight::Normal => {
                    if current_color.is_some() {
                        queue!(self.frame, SetForegroundColor(Color::Reset))?;
                        current_color = None;
                    }
                    queue!(self.frame, Print(ch))?;
                }
                tag => {
                    let color = tag.color();
                    if current_color != Some(color) {
                        queue!(self.frame, SetForegroundColor(color))?;
                        current_color = Some(color);
                    }
                    queue!(self.frame, Print(ch))?;
                }
            }
        }

        queue!(self.frame, SetForegroundColor(Color::Reset))
    }

    fn draw_welcome(&mut self, state: &EditorState) -> io::Result<()> {
        let mut welcome = format!("tilde editor -- version {}", env!("CARGO_PKG_VERSION"));
        welcome.truncate(state.screen_cols);
        let mut padding = (state.screen_cols - welcome.len()) / 2;
        if padding > 0 {
            queue!(self.frame, Print("~"))?;
            padding -= 1;
        }
        queue!(self.frame, Print(" ".repeat(padding)), Print(welcome))
    }

    fn draw_status_bar(&mut self, state: &EditorState) -> io::Result<()> {
        let name = state
            .filename
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string());
        let name: String = name.chars().take(20).collect();
        let modified = if state.dirty > 0 { "(modified)" } else { "" };
        let mut left = format!("{} - {} lines {}", name, state.rows.len(), modified);

        let filetype = state.syntax.map(|profile| profile.name).unwrap_or("no ft");
        let right = format!("{} | {}/{}", filetype, state.cursor_y + 1, state.rows.len());

        left = left.chars().take(state.screen_cols).collect();
        let gap = state.screen_cols - left.chars().count();
        let line = if right.len() <= gap {
            format!("{}{}{}", left, " ".repeat(gap - right.len()), right)
        } else {
            format!("{}{}", left, " ".repeat(gap))
        };

        queue!(
            self.frame,
            SetAttribute(Attribute::Reverse),
            Print(line),
            SetAttribute(Attribute::Reset),
            Print("\r\n")
        )
    }

    fn draw_message_bar(&mut self, state: &EditorState) -> io::Result<()> {
        queue!(self.frame, Clear(ClearType::UntilNewLine))?;
        if let Some(text) = state.status.visible_text() {
            let message: String = text.chars().take(state.screen_cols).collect();
            queue!(self.frame, Print(message))?;
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
