use std::path::PathBuf;

use crate::state::EditorState;

pub(super) fn test_state() -> EditorState {
    let mut state = EditorState::new();
    state.resize_viewport(80, 24);
    state
}

/// A state with the C syntax profile active and the given document text.
pub(super) fn c_state(text: &str) -> EditorState {
    let mut state = test_state();
    let lines = text.split('\n').map(str::to_string).collect();
    state.open_rows(PathBuf::from("test.c"), lines);
    state
}

/// A state with no syntax profile (plain-text filename).
pub(super) fn plain_state(text: &str) -> EditorState {
    let mut state = test_state();
    let lines = text.split('\n').map(str::to_string).collect();
    state.open_rows(PathBuf::from("test.txt"), lines);
    state
}

pub(super) fn assert_row_invariants(state: &EditorState) {
    for (y, row) in state.rows.iter().enumerate() {
        assert_eq!(
            row.render.len(),
            row.highlight.len(),
            "render/highlight length mismatch on row {}",
            y
        );
    }
}
