//! Frame composition and terminal output.
//!
//! The render path is split into pure pieces and one effectful sink:
//! * `viewport` decides which line range is visible (margin-based
//!   look-ahead scrolling).
//! * `row` clips a single buffer line into a fixed-width row, embedding
//!   the cursor highlight for the cursor's line.
//! * `status` composes the status line.
//! * `frame` assembles rows + separator + status into a `Frame`.
//! * `writer` batches the frame into queued terminal commands and
//!   flushes once.
//!
//! Everything up to `writer` is string math with no terminal coupling,
//! which is where the tests live. Terminal dimensions are queried once
//! per render pass by the caller and threaded through explicitly.

pub mod frame;
pub mod row;
pub mod status;
pub mod viewport;
pub mod writer;

pub use frame::{Frame, Row};
pub use viewport::{Viewport, adjust_range, visible_range};
pub use writer::present;
