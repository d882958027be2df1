#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Editor(EditorAction),
    Layout(LayoutAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    InsertChar(char),
    BreakLine,
    DeleteBackward,
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    PageUp,
    PageDown,
    Save,
    Find,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
    ViewportResized { width: u16, height: u16 },
}
