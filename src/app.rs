use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::{error, info, trace};

use crate::action::{AppAction, EditorAction, LayoutAction};
use crate::file_io;
use crate::input::InputHandler;
use crate::state::{EditorState, PromptSignal, QUIT_CONFIRM_TIMES};
use crate::ui::{Renderer, TerminalSession};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub struct App {
    state: EditorState,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl App {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("query terminal size failed")?;
        let mut state = EditorState::new();
        state.resize_viewport(width as usize, height as usize);

        Ok(Self {
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        })
    }

    pub fn run(mut self, file_path: Option<PathBuf>) -> Result<()> {
        let _session = TerminalSession::acquire().context("enable raw mode failed")?;

        if let Some(path) = file_path {
            let lines = file_io::load_lines(&path)
                .with_context(|| format!("open {} failed", path.display()))?;
            info!("opened {} ({} lines)", path.display(), lines.len());
            self.state.open_rows(path, lines);
        }
        self.state
            .set_status_message("HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find");

        let mut stdout = io::stdout();
        loop {
            self.renderer
                .render(&mut self.state, &mut stdout)
                .context("render frame failed")?;
            trace!("redraw");

            let Some(action) = self.next_action().context("read terminal input failed")? else {
                continue;
            };
            if self.apply(action)?.is_break() {
                break;
            }
        }

        info!("quit");
        Ok(())
    }

    /// Blocks for the next decoded input, bounded by a short timeout; a
    /// timeout with no pending event is a no-op iteration.
    fn next_action(&self) -> io::Result<Option<AppAction>> {
        if !event::poll(INPUT_POLL_TIMEOUT)? {
            return Ok(None);
        }
        let event = event::read()?;
        Ok(self.input_handler.action(&event))
    }

    fn apply(&mut self, action: AppAction) -> Result<ControlFlow<()>> {
        match action {
            AppAction::Layout(LayoutAction::ViewportResized { width, height }) => {
                self.state.resize_viewport(width as usize, height as usize);
            }
            AppAction::Editor(EditorAction::Quit) => return Ok(self.confirm_quit()),
            AppAction::Editor(editor_action) => {
                // Any non-quit key restarts the quit confirmation sequence.
                self.state.quit_confirms_left = QUIT_CONFIRM_TIMES;
                self.apply_editor(editor_action)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn apply_editor(&mut self, action: EditorAction) -> Result<()> {
        match action {
            EditorAction::InsertChar(ch) => self.state.insert_char(ch),
            EditorAction::BreakLine => self.state.insert_newline(),
            EditorAction::DeleteBackward => self.state.delete_char(),
            EditorAction::DeleteForward => self.state.delete_char_forward(),
            EditorAction::MoveLeft => self.state.move_cursor_left(),
            EditorAction::MoveRight => self.state.move_cursor_right(),
            EditorAction::MoveUp => self.state.move_cursor_up(),
            EditorAction::MoveDown => self.state.move_cursor_down(),
            EditorAction::MoveLineStart => self.state.move_cursor_line_start(),
            EditorAction::MoveLineEnd => self.state.move_cursor_line_end(),
            EditorAction::PageUp => self.state.page_up(),
            EditorAction::PageDown => self.state.page_down(),
            EditorAction::Save => self.save()?,
            EditorAction::Find => self.find()?,
            EditorAction::Quit => unreachable!("quit is handled in apply"),
        }
        Ok(())
    }

    fn confirm_quit(&mut self) -> ControlFlow<()> {
        if self.state.dirty > 0 && self.state.quit_confirms_left > 0 {
            let remaining = self.state.quit_confirms_left;
            self.state.set_status_message(format!(
                "WARNING! file has unsaved changes. Press Ctrl-Q {} more times to quit.",
                remaining
            ));
            self.state.quit_confirms_left -= 1;
            return ControlFlow::Continue(());
        }
        ControlFlow::Break(())
    }

    fn save(&mut self) -> Result<()> {
        if self.state.filename.is_none() {
            let Some(name) = self.prompt("Save as: {} (ESC to cancel)", |_, _, _| {})? else {
                self.state.set_status_message("save aborted");
                return Ok(());
            };
            self.state.set_filename(PathBuf::from(name));
        }
        let Some(path) = self.state.filename.clone() else {
            return Ok(());
        };

        let bytes = self.state.rows_to_bytes();
        match file_io::save(&path, &bytes) {
            Ok(written) => {
                info!("saved {} ({} bytes)", path.display(), written);
                self.state.dirty = 0;
                self.state
                    .set_status_message(format!("{} bytes written to disk", written));
            }
            Err(err) => {
                // Soft failure: the document stays dirty, the user retries.
                error!("save failed: {}", err);
                self.state
                    .set_status_message(format!("Can't save! I/O error: {}", err));
            }
        }
        Ok(())
    }

    fn find(&mut self) -> Result<()> {
        let saved_cursor = (self.state.cursor_x, self.state.cursor_y);
        let saved_scroll = (self.state.col_offset, self.state.row_offset);

        let accepted = self.prompt("Search: {} (Use ESC/Arrows/Enter)", |state, query, signal| {
            state.search_step(query, signal);
        })?;

        if accepted.is_none() {
            (self.state.cursor_x, self.state.cursor_y) = saved_cursor;
            (self.state.col_offset, self.state.row_offset) = saved_scroll;
        }
        Ok(())
    }

    /// Status-bar prompt. `template` contains a `{}` placeholder for the
    /// input typed so far; `on_key` fires on every keystroke, including the
    /// accepting and canceling ones.
    fn prompt(
        &mut self,
        template: &str,
        mut on_key: impl FnMut(&mut EditorState, &str, PromptSignal),
    ) -> Result<Option<String>> {
        let mut input = String::new();
        let mut stdout = io::stdout();

        loop {
            self.state
                .set_status_message(template.replace("{}", &input));
            self.renderer
                .render(&mut self.state, &mut stdout)
                .context("render frame failed")?;

            if !event::poll(INPUT_POLL_TIMEOUT).context("read terminal input failed")? {
                continue;
            }
            let key = match event::read().context("read terminal input failed")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => key,
                Event::Resize(width, height) => {
                    self.state.resize_viewport(width as usize, height as usize);
                    continue;
                }
                _ => continue,
            };

            let Some(signal) = prompt_step(&mut input, &key) else {
                continue;
            };
            match signal {
                PromptSignal::Cancel => {
                    self.state.set_status_message("");
                    on_key(&mut self.state, &input, PromptSignal::Cancel);
                    return Ok(None);
                }
                PromptSignal::Accept => {
                    self.state.set_status_message("");
                    on_key(&mut self.state, &input, PromptSignal::Accept);
                    return Ok(Some(input));
                }
                signal => on_key(&mut self.state, &input, signal),
            }
        }
    }
}

/// Applies one keystroke to the prompt input line. `None` means the key is
/// swallowed without notifying the callback (Enter on an empty input).
fn prompt_step(input: &mut String, key: &KeyEvent) -> Option<PromptSignal> {
    match key.code {
        KeyCode::Esc => Some(PromptSignal::Cancel),
        KeyCode::Enter if input.is_empty() => None,
        KeyCode::Enter => Some(PromptSignal::Accept),
        KeyCode::Backspace | KeyCode::Delete => {
            input.pop();
            Some(PromptSignal::Edited)
        }
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.pop();
            Some(PromptSignal::Edited)
        }
        KeyCode::Right | KeyCode::Down => Some(PromptSignal::FindNext),
        KeyCode::Left | KeyCode::Up => Some(PromptSignal::FindPrev),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                && !ch.is_control() =>
        {
            input.push(ch);
            Some(PromptSignal::Edited)
        }
        _ => Some(PromptSignal::Edited),
    }
}
