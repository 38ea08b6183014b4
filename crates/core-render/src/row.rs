//! Per-line row formatting.
//!
//! Each rendered row is `gutter + content` where the gutter is a 4-digit
//! 1-based line number ("  12: ") and the content cell is exactly
//! `width` characters. The cursor's row additionally scrolls
//! horizontally so the cursor always falls inside the content cell, and
//! is split into before/at/after segments so the writer can style the
//! cursor cell without this module knowing about escape sequences.
//! All widths are character counts; clipping never splits a character.

/// Gutter cell: 4-digit number, colon, space.
pub const GUTTER_WIDTH: usize = 6;

pub fn gutter(number: usize) -> String {
    format!("{:>4}: ", number)
}

/// Horizontal scroll needed to keep `col` inside a `width`-column cell.
pub fn horizontal_offset(col: usize, width: usize) -> usize {
    (col + 1).saturating_sub(width)
}

/// A cursor row split around the highlighted cell. `pad` is the number
/// of trailing spaces that completes the content cell to `width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRow {
    pub gutter: String,
    pub before: String,
    pub at: char,
    pub after: String,
    pub pad: usize,
}

impl CursorRow {
    /// Plain-text rendition (highlight dropped), used by tests and logs.
    pub fn to_plain(&self) -> String {
        let mut s = String::with_capacity(GUTTER_WIDTH + self.before.len() + self.after.len() + 1);
        s.push_str(&self.gutter);
        s.push_str(&self.before);
        s.push(self.at);
        s.push_str(&self.after);
        s.extend(std::iter::repeat(' ').take(self.pad));
        s
    }
}

/// Lay out the cursor's line. `col` may equal the line length, in which
/// case the cursor cell is a space after the last character.
pub fn layout_cursor_row(number: usize, text: &str, col: usize, width: usize) -> CursorRow {
    let chars: Vec<char> = text.chars().collect();
    let offset = horizontal_offset(col, width);
    let slice: Vec<char> = chars
        .iter()
        .skip(offset.min(chars.len()))
        .take(width)
        .copied()
        .collect();

    let cursor_at = col.saturating_sub(offset).min(slice.len());
    let mut before: Vec<char> = slice[..cursor_at].to_vec();
    let at = slice.get(cursor_at).copied().unwrap_or(' ');
    let after: Vec<char> = if cursor_at + 1 < slice.len() {
        slice[cursor_at + 1..].to_vec()
    } else {
        Vec::new()
    };

    // Reserve room for the cursor cell and the tail; if the head still
    // overflows, keep its tail end (the characters nearest the cursor).
    let max_before = width.saturating_sub(1).saturating_sub(after.len());
    if before.len() > max_before {
        before.drain(..before.len() - max_before);
    }

    let used = before.len() + 1 + after.len();
    let pad = width.saturating_sub(used);
    CursorRow {
        gutter: gutter(number),
        before: before.into_iter().collect(),
        at,
        after: after.into_iter().collect(),
        pad,
    }
}

/// A non-cursor row: the raw (unscrolled) head of the line, padded.
pub fn render_text_row(number: usize, text: &str, width: usize) -> String {
    let mut row = gutter(number);
    let mut used = 0;
    for c in text.chars().take(width) {
        row.push(c);
        used += 1;
    }
    row.extend(std::iter::repeat(' ').take(width - used));
    row
}

/// A row past the end of the document.
pub fn placeholder_row(width: usize) -> String {
    let mut row = String::with_capacity(GUTTER_WIDTH + width);
    row.push('~');
    row.extend(std::iter::repeat(' ').take((GUTTER_WIDTH + width).saturating_sub(1)));
    row
}
