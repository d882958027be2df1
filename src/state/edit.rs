use super::EditorState;

impl EditorState {
    pub fn move_cursor_left(&mut self) {
        if self.cursor_x > 0 {
            self.cursor_x = self.prev_char_boundary(self.cursor_x);
        } else if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.rows[self.cursor_y].raw.len();
        }
    }

    pub fn move_cursor_right(&mut self) {
        match self.rows.get(self.cursor_y) {
            Some(row) if self.cursor_x < row.raw.len() => {
                self.cursor_x = self.next_char_boundary(self.cursor_x);
            }
            Some(_) => {
                self.cursor_y += 1;
                self.cursor_x = 0;
            }
            None => {}
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.clamp_cursor_x();
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_y < self.rows.len() {
            self.cursor_y += 1;
            self.clamp_cursor_x();
        }
    }

    pub fn move_cursor_line_start(&mut self) {
        self.cursor_x = 0;
    }

    pub fn move_cursor_line_end(&mut self) {
        if let Some(row) = self.rows.get(self.cursor_y) {
            self.cursor_x = row.raw.len();
        }
    }

    /// Jumps to the top of the viewport, then moves one screenful up.
    pub fn page_up(&mut self) {
        self.cursor_y = self.row_offset;
        for _ in 0..self.screen_rows {
            self.move_cursor_up();
        }
    }

    /// Jumps to the bottom of the viewport, then moves one screenful down.
    pub fn page_down(&mut self) {
        self.cursor_y = (self.row_offset + self.screen_rows.saturating_sub(1)).min(self.rows.len());
        for _ in 0..self.screen_rows {
            self.move_cursor_down();
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        if self.cursor_y == self.rows.len() {
            self.insert_row(self.cursor_y, "");
        }
        self.row_insert_char(self.cursor_y, self.cursor_x, ch);
        self.cursor_x += ch.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        if self.cursor_x == 0 {
            self.insert_row(self.cursor_y, "");
        } else {
            self.split_row(self.cursor_y, self.cursor_x);
        }
        self.cursor_y += 1;
        self.cursor_x = 0;
    }

    /// Backspace: deletes the char before the cursor, or joins with the
    /// previous line at column zero.
    pub fn delete_char(&mut self) {
        if self.cursor_y == self.rows.len() {
            return;
        }
        if self.cursor_x == 0 && self.cursor_y == 0 {
            return;
        }

        if self.cursor_x > 0 {
            let at = self.prev_char_boundary(self.cursor_x);
            self.row_delete_char(self.cursor_y, at);
            self.cursor_x = at;
        } else if let Some(seam) = self.join_with_previous(self.cursor_y) {
            self.cursor_y -= 1;
            self.cursor_x = seam;
        }
    }

    /// Delete key: removes the char under the cursor.
    pub fn delete_char_forward(&mut self) {
        if self.cursor_y == self.rows.len() {
            return;
        }
        self.move_cursor_right();
        self.delete_char();
    }

    /// Moving vertically may land past the end of a shorter line, or in the
    /// middle of a multi-byte char on the target line.
    fn clamp_cursor_x(&mut self) {
        let Some(row) = self.rows.get(self.cursor_y) else {
            self.cursor_x = 0;
            return;
        };
        self.cursor_x = self.cursor_x.min(row.raw.len());
        while self.cursor_x > 0 && !row.raw.is_char_boundary(self.cursor_x) {
            self.cursor_x -= 1;
        }
    }

    fn prev_char_boundary(&self, at: usize) -> usize {
        let Some(row) = self.rows.get(self.cursor_y) else {
            return 0;
        };
        let mut at = at.min(row.raw.len()).saturating_sub(1);
        while at > 0 && !row.raw.is_char_boundary(at) {
            at -= 1;
        }
        at
    }

    fn next_char_boundary(&self, at: usize) -> usize {
        let Some(row) = self.rows.get(self.cursor_y) else {
            return at;
        };
        let mut at = (at + 1).min(row.raw.len());
        while at < row.raw.len() && !row.raw.is_char_boundary(at) {
            at += 1;
        }
        at
    }
}
