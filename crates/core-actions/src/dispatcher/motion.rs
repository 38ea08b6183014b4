//! Motion sub-dispatch (cursor movement).
//!
//! Pure cursor movement: no side effect beyond the cursor itself. Each
//! `MotionKind` maps onto one `core_text::motion` primitive; repeat
//! counts are unrolled by the caller, one primitive call per iteration.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;
use core_text::motion;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = (state.cursor.line, state.cursor.col);
    let f = match kind {
        MotionKind::Left => motion::left,
        MotionKind::Right => motion::right,
        MotionKind::Up => motion::up,
        MotionKind::Down => motion::down,
        MotionKind::WordForward => motion::word_forward,
        MotionKind::WordBackward => motion::word_backward,
        MotionKind::WordEnd => motion::word_end,
        MotionKind::LineStart => motion::line_start,
        MotionKind::LineEnd => motion::line_end,
    };
    f(&state.buffer, &mut state.cursor);
    if (state.cursor.line, state.cursor.col) != before {
        tracing::trace!(
            target: "actions.dispatch",
            motion = ?kind,
            from_line = before.0,
            from_col = before.1,
            to_line = state.cursor.line,
            to_col = state.cursor.col,
            "motion"
        );
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
