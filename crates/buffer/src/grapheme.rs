// Chunk: docs/chunks/grapheme_columns - Columns count grapheme clusters, not chars

//! Column arithmetic over grapheme clusters.
//!
//! A column is a user-perceived character. For ASCII text one column is one
//! byte, which is the fast path for everything here. For anything else the
//! line is segmented with `unicode-segmentation`, so that:
//!
//! - ZWJ emoji sequences (👨‍👩‍👧‍👦) occupy a single column
//! - Combining sequences (e + U+0301) occupy a single column
//! - Regional indicator pairs (🇺🇸) occupy a single column
//!
//! The caret can therefore never land between the pieces of one glyph, and
//! backspace always removes a whole glyph.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the number of columns (grapheme clusters) in `text`.
pub fn column_count(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }
    text.graphemes(true).count()
}

/// Returns the byte offset of the boundary in front of `column`.
///
/// Columns past the end of the line map to `text.len()`.
pub fn byte_offset(text: &str, column: usize) -> usize {
    if text.is_ascii() {
        return column.min(text.len());
    }
    text.grapheme_indices(true)
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Returns the byte range of the grapheme that ends at `column`.
///
/// `None` when `column` is 0 (nothing before the caret).
pub fn range_before(text: &str, column: usize) -> Option<std::ops::Range<usize>> {
    if column == 0 {
        return None;
    }
    let end = byte_offset(text, column);
    let start = byte_offset(text, column - 1);
    (start < end).then_some(start..end)
}

/// Returns the column just after `ch` once it is inserted at `column`.
///
/// This is usually `column + 1`, but a combining mark fuses with the glyph in
/// front of it and leaves the caret where it was.
pub fn column_after_insert(text: &str, column: usize, ch: char) -> usize {
    if text.is_ascii() && ch.is_ascii() {
        return column.min(text.len()) + 1;
    }
    let mut prefix = String::with_capacity(byte_offset(text, column) + ch.len_utf8());
    prefix.push_str(&text[..byte_offset(text, column)]);
    prefix.push(ch);

    // The inserted char may also fuse with the glyph that follows it; count
    // on the joined string and locate the boundary after the prefix.
    let mut joined = prefix.clone();
    joined.push_str(&text[byte_offset(text, column)..]);
    let boundary = prefix.len();
    joined
        .grapheme_indices(true)
        .take_while(|(offset, _)| *offset < boundary)
        .count()
}
