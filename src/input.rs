use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::{AppAction, EditorAction, LayoutAction};

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn action(&self, event: &Event) -> Option<AppAction> {
        match event {
            Event::Resize(width, height) => Some(AppAction::Layout(
                LayoutAction::ViewportResized {
                    width: *width,
                    height: *height,
                },
            )),
            Event::Key(key) => self.editor_action(key).map(AppAction::Editor),
            _ => None,
        }
    }

    fn editor_action(&self, key: &KeyEvent) -> Option<EditorAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('q') => Some(EditorAction::Quit),
                KeyCode::Char('s') => Some(EditorAction::Save),
                KeyCode::Char('f') => Some(EditorAction::Find),
                KeyCode::Char('h') => Some(EditorAction::DeleteBackward),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(EditorAction::BreakLine),
            KeyCode::Backspace => Some(EditorAction::DeleteBackward),
            KeyCode::Delete => Some(EditorAction::DeleteForward),
            KeyCode::Left => Some(EditorAction::MoveLeft),
            KeyCode::Right => Some(EditorAction::MoveRight),
            KeyCode::Up => Some(EditorAction::MoveUp),
            KeyCode::Down => Some(EditorAction::MoveDown),
            KeyCode::Home => Some(EditorAction::MoveLineStart),
            KeyCode::End => Some(EditorAction::MoveLineEnd),
            KeyCode::PageUp => Some(EditorAction::PageUp),
            KeyCode::PageDown => Some(EditorAction::PageDown),
            KeyCode::Tab => Some(EditorAction::InsertChar('\t')),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(EditorAction::InsertChar(ch))
            }
            _ => None,
        }
    }
}
