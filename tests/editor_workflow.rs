use std::path::PathBuf;

use tilde::file_io;
use tilde::state::EditorState;
use tilde::syntax::Highlight;

fn state_with_file(path: PathBuf, text: &str) -> EditorState {
    let mut state = EditorState::new();
    state.resize_viewport(80, 24);
    let lines = text.split('\n').map(str::to_string).collect();
    state.open_rows(path, lines);
    state
}

#[test]
fn save_then_load_should_round_trip_line_content() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("notes.txt");

    let mut state = state_with_file(path.clone(), "first\nsecond\tindented\nthird");
    state.move_cursor_line_end();
    state.insert_char('!');

    let written = file_io::save(&path, &state.rows_to_bytes()).expect("save document");
    assert_eq!(written, state.rows_to_bytes().len());

    let reloaded = file_io::load_lines(&path).expect("reload document");
    let raw_lines: Vec<&str> = state.rows.iter().map(|row| row.raw.as_str()).collect();
    assert_eq!(reloaded, raw_lines);
}

#[test]
fn typing_a_c_file_should_keep_highlighting_consistent() {
    let mut state = state_with_file(PathBuf::from("demo.c"), "");
    assert!(state.syntax.is_some());

    for ch in "if (x) {\n\treturn 42;\n}".chars() {
        if ch == '\n' {
            state.insert_newline();
        } else {
            state.insert_char(ch);
        }
    }

    assert_eq!(state.rows.len(), 3);
    for row in &state.rows {
        assert_eq!(row.render.len(), row.highlight.len());
    }
    // `if` at the start of row 0, `return` after the expanded tab on row 1.
    assert_eq!(state.rows[0].highlight[0], Highlight::Keyword);
    assert_eq!(state.rows[1].highlight[8], Highlight::Keyword);
    assert_eq!(state.rows[1].highlight[15], Highlight::Number);
}

#[test]
fn opening_a_comment_mid_document_should_cascade_and_close_should_settle() {
    let mut state = state_with_file(PathBuf::from("demo.c"), "int a;\nint b;\nint c;");
    assert_eq!(state.rows[2].highlight[0], Highlight::Type);

    state.cursor_y = 0;
    state.cursor_x = state.rows[0].raw.len();
    state.insert_char('/');
    state.insert_char('*');
    assert!(state.rows.iter().all(|row| row.open_comment_at_end));
    assert_eq!(state.rows[2].highlight[0], Highlight::MultilineComment);

    state.cursor_y = 2;
    state.cursor_x = state.rows[2].raw.len();
    state.insert_char('*');
    state.insert_char('/');
    assert!(!state.rows[2].open_comment_at_end);
    // Rows above are still inside the comment.
    assert!(state.rows[0].open_comment_at_end);
    assert!(state.rows[1].open_comment_at_end);
}

#[test]
fn dirty_counter_should_clear_on_save_snapshot_reload() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("draft.txt");

    let mut state = state_with_file(path.clone(), "draft");
    assert_eq!(state.dirty, 0);

    state.insert_char('x');
    assert!(state.dirty > 0);

    file_io::save(&path, &state.rows_to_bytes()).expect("save document");
    state.dirty = 0;

    let lines = file_io::load_lines(&path).expect("reload document");
    let mut reloaded = EditorState::new();
    reloaded.resize_viewport(80, 24);
    reloaded.open_rows(path, lines);
    assert_eq!(reloaded.dirty, 0);
    assert_eq!(reloaded.rows[0].raw, "xdraft");
}
