use super::EditorState;
use crate::syntax::Highlight;

/// What the prompt reports to its per-keystroke callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSignal {
    Edited,
    FindNext,
    FindPrev,
    Accept,
    Cancel,
}

/// Incremental-find state carried across prompt keystrokes.
#[derive(Debug)]
pub(crate) struct SearchState {
    last_match: Option<usize>,
    forward: bool,
    saved_highlight: Option<(usize, Vec<Highlight>)>,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self {
            last_match: None,
            forward: true,
            saved_highlight: None,
        }
    }
}

impl EditorState {
    /// Advances the incremental search by one prompt keystroke.
    ///
    /// Always restores the previous match's highlight overlay first, so the
    /// overlay never outlives the match it belongs to.
    pub fn search_step(&mut self, query: &str, signal: PromptSignal) {
        self.restore_search_overlay();

        match signal {
            PromptSignal::Accept | PromptSignal::Cancel => {
                self.search.last_match = None;
                self.search.forward = true;
                return;
            }
            PromptSignal::FindNext => self.search.forward = true,
            PromptSignal::FindPrev => self.search.forward = false,
            PromptSignal::Edited => {
                self.search.last_match = None;
                self.search.forward = true;
            }
        }

        if self.search.last_match.is_none() {
            self.search.forward = true;
        }

        let row_count = self.rows.len();
        let mut current = self.search.last_match;
        for _ in 0..row_count {
            // Step with wraparound past either end; the anchor row itself is
            // only revisited after a full cycle.
            current = Some(match (current, self.search.forward) {
                (None, true) => 0,
                (None, false) => row_count - 1,
                (Some(at), true) => {
                    if at + 1 == row_count {
                        0
                    } else {
                        at + 1
                    }
                }
                (Some(at), false) => {
                    if at == 0 {
                        row_count - 1
                    } else {
                        at - 1
                    }
                }
            });
            let at = current.expect("candidate index set above");

            let Some(offset) = self.rows[at].render.find(query) else {
                continue;
            };

            self.search.last_match = Some(at);
            self.cursor_y = at;
            self.cursor_x = self.rows[at].rx_to_cx(offset);
            // Forces the next scroll() to place the match row at the top of
            // the viewport.
            self.row_offset = row_count;

            self.search.saved_highlight = Some((at, self.rows[at].highlight.clone()));
            self.rows[at].highlight[offset..offset + query.len()].fill(Highlight::Match);
            break;
        }
    }

    /// Puts back the pre-match highlight of the last overlaid row.
    pub fn restore_search_overlay(&mut self) {
        let Some((at, saved)) = self.search.saved_highlight.take() else {
            return;
        };
        if let Some(row) = self.rows.get_mut(at)
            && row.highlight.len() == saved.len()
        {
            row.highlight = saved;
        }
    }
}
