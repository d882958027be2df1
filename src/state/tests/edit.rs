use super::common::{assert_row_invariants, plain_state};

#[test]
fn insert_then_delete_should_restore_raw() {
    let mut state = plain_state("hello world");
    state.cursor_x = 5;

    state.insert_char('!');
    assert_eq!(state.rows[0].raw, "hello! world");

    state.delete_char();
    assert_eq!(state.rows[0].raw, "hello world");
    assert_eq!(state.cursor_x, 5);
}

#[test]
fn split_then_join_should_reproduce_original_line() {
    let mut state = plain_state("hello world");
    state.cursor_x = 5;

    state.insert_newline();
    assert_eq!(state.rows[0].raw, "hello");
    assert_eq!(state.rows[1].raw, " world");
    assert_eq!((state.cursor_y, state.cursor_x), (1, 0));

    state.delete_char();
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].raw, "hello world");
    assert_eq!((state.cursor_y, state.cursor_x), (0, 5));
    assert_row_invariants(&state);
}

#[test]
fn enter_at_line_start_should_insert_empty_row_above() {
    let mut state = plain_state("abc");
    state.insert_newline();
    assert_eq!(state.rows[0].raw, "");
    assert_eq!(state.rows[1].raw, "abc");
    assert_eq!((state.cursor_y, state.cursor_x), (1, 0));
}

#[test]
fn insert_on_virtual_last_line_should_append_row() {
    let mut state = plain_state("abc");
    state.move_cursor_down();
    assert_eq!(state.cursor_y, 1);

    state.insert_char('x');
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.rows[1].raw, "x");
}

#[test]
fn move_right_at_line_end_should_wrap_to_next_line() {
    let mut state = plain_state("ab\ncd");
    state.move_cursor_right();
    state.move_cursor_right();
    assert_eq!((state.cursor_y, state.cursor_x), (0, 2));

    state.move_cursor_right();
    assert_eq!((state.cursor_y, state.cursor_x), (1, 0));
}

#[test]
fn move_left_at_line_start_should_wrap_to_previous_line_end() {
    let mut state = plain_state("ab\ncd");
    state.move_cursor_down();
    state.move_cursor_left();
    assert_eq!((state.cursor_y, state.cursor_x), (0, 2));
}

#[test]
fn vertical_move_should_clamp_to_shorter_line() {
    let mut state = plain_state("abcd\nx");
    state.move_cursor_line_end();
    assert_eq!(state.cursor_x, 4);

    state.move_cursor_down();
    assert_eq!((state.cursor_y, state.cursor_x), (1, 1));
}

#[test]
fn delete_forward_at_line_end_should_join_next_line() {
    let mut state = plain_state("ab\ncd");
    state.move_cursor_line_end();

    state.delete_char_forward();
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].raw, "abcd");
    assert_eq!((state.cursor_y, state.cursor_x), (0, 2));
}

#[test]
fn backspace_at_document_start_should_do_nothing() {
    let mut state = plain_state("abc");
    state.delete_char();
    assert_eq!(state.rows[0].raw, "abc");
    assert_eq!((state.cursor_y, state.cursor_x), (0, 0));
}

#[test]
fn multibyte_chars_should_move_and_delete_whole_chars() {
    let mut state = plain_state("aßc");
    state.move_cursor_right();
    state.move_cursor_right();
    assert_eq!(state.cursor_x, 3);

    state.delete_char();
    assert_eq!(state.rows[0].raw, "ac");
    assert_eq!(state.cursor_x, 1);
    assert_row_invariants(&state);
}

#[test]
fn scroll_on_collapsed_viewport_should_keep_offsets_at_or_before_cursor() {
    let mut state = plain_state("one\ntwo\nthree");

    // Two terminal rows leave zero rows for text.
    state.resize_viewport(80, 2);
    assert_eq!(state.screen_rows, 0);
    state.scroll();
    assert!(state.row_offset <= state.cursor_y);

    state.move_cursor_down();
    state.scroll();
    assert!(state.row_offset <= state.cursor_y);

    // Same on the column axis with zero width.
    state.resize_viewport(0, 24);
    state.move_cursor_right();
    state.scroll();
    assert!(state.col_offset <= state.render_x);
}

#[test]
fn page_down_should_advance_one_screenful() {
    let text = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let mut state = plain_state(&text);
    assert_eq!(state.screen_rows, 22);

    state.page_down();
    state.scroll();
    assert!(state.cursor_y > 22);
    assert!(state.cursor_y <= state.rows.len());
}
