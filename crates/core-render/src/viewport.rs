//! Margin-based viewport scrolling.
//!
//! `adjust_range` is the scroll policy: given the cursor, the previous
//! range, the document bounds, a margin, and the travel direction, it
//! shifts the range just enough to keep the cursor at least `margin`
//! lines from the near edge, bounded by the document's slack on that
//! side, so the window never overshoots the first or last line. The
//! cursor is clamped into the range for the distance computation only.
//!
//! `visible_range` is the per-frame entry point: it first slides the
//! previous range to contain the cursor (a command-mode jump can land
//! far outside it), clamps to the document, then applies `adjust_range`
//! for the look-ahead behavior.

/// Half-open range of visible line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub start: usize,
    pub end: usize,
}

impl Viewport {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "viewport range must be ordered");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end
    }
}

/// Scroll `range` toward the cursor's travel direction when the cursor
/// sits closer than `margin` lines to the near edge. Returns the new
/// range and the signed scroll amount. The result never leaves
/// `[0, line_count]`.
pub fn adjust_range(
    cursor_line: usize,
    range: Viewport,
    line_count: usize,
    margin: usize,
    forward: bool,
) -> (Viewport, isize) {
    // Snap the incoming range into document bounds before measuring.
    let end = range.end.min(line_count);
    let start = range.start.min(end);

    let pos = cursor_line.clamp(start, end);
    let distance_to_start = pos - start;
    let distance_to_end = end - pos;
    let slack_start = start;
    let slack_end = line_count - end;

    let scroll: isize = if forward && distance_to_end < margin && slack_end > 0 {
        (margin - distance_to_end).min(slack_end) as isize
    } else if !forward && distance_to_start < margin && slack_start > 0 {
        -((margin - distance_to_start).min(slack_start) as isize)
    } else {
        0
    };

    let shifted = Viewport::new(
        (start as isize + scroll) as usize,
        (end as isize + scroll) as usize,
    );
    (shifted, scroll)
}

/// Compute this frame's visible range from the previous one.
pub fn visible_range(
    cursor_line: usize,
    prev: Viewport,
    rows: usize,
    line_count: usize,
    margin: usize,
    forward: bool,
) -> (Viewport, isize) {
    if rows == 0 {
        return (Viewport::new(0, 0), 0);
    }
    let mut start = prev.start.min(line_count.saturating_sub(1));
    // A jump (e.g. `:42`) can leave the cursor outside the previous
    // window; slide the window to its edge before applying the margin.
    if cursor_line < start {
        start = cursor_line;
    }
    if cursor_line >= start + rows {
        start = cursor_line + 1 - rows;
    }
    let end = (start + rows).min(line_count);
    // A window shorter than the configured rows (document edge) cannot
    // honor the full margin; clamp to half its height so the scroll
    // never pushes the cursor out of view.
    let margin = margin.min((end - start) / 2);
    adjust_range(cursor_line, Viewport::new(start, end), line_count, margin, forward)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scroll_while_cursor_clears_the_margin() {
        // rows=10, margin=5, document of 100: at line 5 the distance to
        // the end of [0,10) is exactly the margin, so nothing moves.
        let (vp, delta) = adjust_range(5, Viewport::new(0, 10), 100, 5, true);
        assert_eq!(vp, Viewport::new(0, 10));
        assert_eq!(delta, 0);
    }

    #[test]
    fn forward_scroll_by_exactly_the_shortfall() {
        let (vp, delta) = adjust_range(6, Viewport::new(0, 10), 100, 5, true);
        assert_eq!(delta, 1);
        assert_eq!(vp, Viewport::new(1, 11));
    }

    #[test]
    fn forward_scroll_limited_by_document_slack() {
        let (vp, delta) = adjust_range(97, Viewport::new(90, 100), 100, 5, true);
        assert_eq!(delta, 0, "no lines remain below the window");
        assert_eq!(vp, Viewport::new(90, 100));
    }

    #[test]
    fn forward_scroll_partial_slack() {
        // Window [88,98), doc 100: shortfall is 4 but only 2 lines remain.
        let (vp, delta) = adjust_range(97, Viewport::new(88, 98), 100, 5, true);
        assert_eq!(delta, 2);
        assert_eq!(vp, Viewport::new(90, 100));
    }

    #[test]
    fn backward_scroll_is_symmetric() {
        let (vp, delta) = adjust_range(52, Viewport::new(50, 60), 100, 5, false);
        assert_eq!(delta, -3);
        assert_eq!(vp, Viewport::new(47, 57));
    }

    #[test]
    fn backward_scroll_never_passes_line_zero() {
        let (vp, delta) = adjust_range(1, Viewport::new(1, 11), 100, 5, false);
        assert_eq!(delta, -1, "only one line of slack above");
        assert_eq!(vp.start, 0);
    }

    #[test]
    fn wrong_direction_never_scrolls() {
        // Cursor hugs the bottom edge but travel is backward.
        let (vp, delta) = adjust_range(9, Viewport::new(0, 10), 100, 5, false);
        assert_eq!(delta, 0);
        assert_eq!(vp, Viewport::new(0, 10));
    }

    #[test]
    fn oversized_prior_range_is_snapped_to_the_document() {
        let (vp, _) = adjust_range(2, Viewport::new(0, 50), 5, 3, true);
        assert_eq!(vp, Viewport::new(0, 5));
    }

    #[test]
    fn visible_range_tracks_a_forward_walk() {
        let mut vp = Viewport::new(0, 10);
        // Walk the cursor from 0 to 6; the first five steps stay put.
        for line in 0..=5 {
            let (next, delta) = visible_range(line, vp, 10, 100, 5, true);
            assert_eq!(delta, 0, "no scroll at line {line}");
            vp = next;
        }
        let (next, delta) = visible_range(6, vp, 10, 100, 5, true);
        assert_eq!(delta, 1);
        assert_eq!(next, Viewport::new(1, 11));
    }

    #[test]
    fn visible_range_contains_a_far_jump_target() {
        let (vp, _) = visible_range(89, Viewport::new(0, 10), 10, 100, 5, true);
        assert!(vp.contains(89));
        assert!(vp.end <= 100);
    }

    #[test]
    fn visible_range_shrinks_with_a_short_document() {
        let (vp, _) = visible_range(2, Viewport::new(0, 10), 10, 4, 5, true);
        assert_eq!(vp, Viewport::new(0, 4));
    }

    #[test]
    fn visible_range_survives_document_shrinkage() {
        // Previous window beyond the new end of a shrunken buffer.
        let (vp, _) = visible_range(2, Viewport::new(40, 50), 10, 3, 1, false);
        assert!(vp.contains(2));
        assert!(vp.end <= 3);
    }

    #[test]
    fn empty_rows_renders_nothing() {
        let (vp, delta) = visible_range(5, Viewport::new(0, 10), 0, 100, 5, true);
        assert!(vp.is_empty());
        assert_eq!(delta, 0);
    }
}
