//! Frame assembly: visible rows + separator + status.
//!
//! A `Frame` is the complete logical content of one repaint, fixed-width
//! strings only, with no escape sequences. The writer turns it into terminal
//! commands. Every repaint redraws all visible rows unconditionally.

use crate::row::{self, CursorRow};
use crate::status::{self, StatusContext};
use crate::viewport::Viewport;
use core_state::EditorState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Text(String),
    Cursor(CursorRow),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<Row>,
    pub separator: String,
    pub status: String,
}

impl Frame {
    /// Rows the terminal cursor must travel back up after the frame is
    /// written (text rows plus separator and status).
    pub fn ui_rows(&self) -> u16 {
        self.rows.len() as u16 + 2
    }
}

/// Build the frame for the current state. `cols` is the terminal width
/// queried for this render pass; `rows` the configured visible-line
/// count. The viewport is assumed current (see `viewport::visible_range`).
pub fn compose(state: &EditorState, view: Viewport, cols: usize, rows: usize) -> Frame {
    let width = cols.saturating_sub(row::GUTTER_WIDTH);
    let mut out = Vec::with_capacity(rows);
    for i in view.start..view.end {
        let text = state.buffer.line(i).unwrap_or("");
        if i == state.cursor.line {
            out.push(Row::Cursor(row::layout_cursor_row(
                i + 1,
                text,
                state.cursor.col,
                width,
            )));
        } else {
            out.push(Row::Text(row::render_text_row(i + 1, text, width)));
        }
    }
    for _ in view.len()..rows {
        out.push(Row::Placeholder(row::placeholder_row(width)));
    }

    let file = state.display_name();
    let ctx = StatusContext {
        mode: &state.mode,
        file: &file,
        line: state.cursor.line,
        total: state.buffer.line_count(),
        col: state.cursor.col,
        modified: state.buffer.is_modified(),
        notice: state.notice.as_ref().map(|n| n.text.as_str()),
    };
    Frame {
        rows: out,
        separator: status::separator(cols),
        status: status::build_status(&ctx, cols),
    }
}
