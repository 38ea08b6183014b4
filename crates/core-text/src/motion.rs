//! Cursor motions.
//!
//! Free functions of `(&Buffer, &mut Cursor)`; none of them mutate buffer
//! content. Word boundaries are explicit character-class scans (whitespace
//! vs. non-whitespace) over the current line only. Word motions that
//! exhaust their line reset the column to 0 and step one line in the
//! travel direction; they never seek a word on the destination line. That
//! boundary behavior is load-bearing for compatibility. Callers and tests
//! rely on it, so keep it when extending these scans.

use crate::{Buffer, Cursor, Direction};

/// Move up one line, re-clamping the column to the destination line.
pub fn up(buffer: &Buffer, cursor: &mut Cursor) {
    if cursor.line > 0 {
        cursor.direction = Direction::Backward;
        cursor.line -= 1;
        cursor.clamp_col(buffer);
    }
}

/// Move down one line, re-clamping the column to the destination line.
pub fn down(buffer: &Buffer, cursor: &mut Cursor) {
    if cursor.line + 1 < buffer.line_count() {
        cursor.direction = Direction::Forward;
        cursor.line += 1;
        cursor.clamp_col(buffer);
    }
}

/// Move left one column; no-op at column 0.
pub fn left(_buffer: &Buffer, cursor: &mut Cursor) {
    if cursor.col > 0 {
        cursor.direction = Direction::Backward;
        cursor.col -= 1;
    }
}

/// Move right one column; clamps at the end-of-line anchor.
pub fn right(buffer: &Buffer, cursor: &mut Cursor) {
    if cursor.col < buffer.line_len(cursor.line) {
        cursor.direction = Direction::Forward;
        cursor.col += 1;
    }
}

/// Jump to column 0.
pub fn line_start(_buffer: &Buffer, cursor: &mut Cursor) {
    cursor.col = 0;
}

/// Jump to the end-of-line anchor (one past the last character).
pub fn line_end(buffer: &Buffer, cursor: &mut Cursor) {
    cursor.direction = Direction::Forward;
    cursor.col = buffer.line_len(cursor.line);
}

/// Move to the next word start: the first non-whitespace character that
/// follows a whitespace character, scanning from one past the cursor. On
/// exhaustion, column 0 of the next line (at the last line only the
/// column reset applies).
pub fn word_forward(buffer: &Buffer, cursor: &mut Cursor) {
    cursor.direction = Direction::Forward;
    let chars: Vec<char> = buffer.line(cursor.line).unwrap_or("").chars().collect();
    // Both the whitespace and the word character must lie inside the scan
    // window, which begins one past the cursor.
    let start = cursor.col + 1;
    let mut j = start + 1;
    while j < chars.len() {
        if !chars[j].is_whitespace() && chars[j - 1].is_whitespace() {
            cursor.col = j;
            return;
        }
        j += 1;
    }
    cursor.col = 0;
    down(buffer, cursor);
}

/// Move to the previous word start: the last character before the cursor
/// that is non-whitespace and sits at line start or after whitespace. On
/// exhaustion, column 0 of the previous line.
pub fn word_backward(buffer: &Buffer, cursor: &mut Cursor) {
    cursor.direction = Direction::Backward;
    let chars: Vec<char> = buffer.line(cursor.line).unwrap_or("").chars().collect();
    let end = cursor.col.min(chars.len());
    let mut found = None;
    for j in 0..end {
        if !chars[j].is_whitespace() && (j == 0 || chars[j - 1].is_whitespace()) {
            found = Some(j);
        }
    }
    match found {
        Some(j) => cursor.col = j,
        None => {
            cursor.col = 0;
            up(buffer, cursor);
        }
    }
}

/// Move to the current/next word end: the first non-whitespace character
/// at or after one past the cursor that is followed by end-of-line or
/// whitespace. Shares `word_forward`'s exhaustion fallback.
pub fn word_end(buffer: &Buffer, cursor: &mut Cursor) {
    cursor.direction = Direction::Forward;
    let chars: Vec<char> = buffer.line(cursor.line).unwrap_or("").chars().collect();
    let mut j = cursor.col + 1;
    while j < chars.len() {
        if !chars[j].is_whitespace() && (j + 1 == chars.len() || chars[j + 1].is_whitespace()) {
            cursor.col = j;
            return;
        }
        j += 1;
    }
    cursor.col = 0;
    down(buffer, cursor);
}
