//! Edit sub-dispatch (buffer mutation).

use super::DispatchResult;
use crate::EditKind;
use core_state::EditorState;

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    match kind {
        EditKind::InsertChar(ch) => {
            state.buffer.insert_char(&mut state.cursor, ch);
        }
        EditKind::Backspace => {
            state.buffer.delete_before(&mut state.cursor);
        }
        EditKind::SplitLine => {
            state.buffer.split_line(&mut state.cursor);
        }
    }
    tracing::trace!(
        target: "actions.dispatch",
        edit = ?kind,
        line = state.cursor.line,
        col = state.cursor.col,
        "edit"
    );
    DispatchResult::dirty()
}
