// Chunk: docs/chunks/line_buffer - Line-vector text buffer with dirty line reporting

//! `LineBuffer` stores the document as an ordered vector of lines.
//!
//! The vector order is the document order; there is no separate line number.
//! The buffer always holds at least one line, and an empty line is an empty
//! string, never a missing entry.
//!
//! Indices here are 0-based lines and 0-based columns. The buffer does not
//! guard against bad indices as a runtime condition: callers (the cursor
//! controller) validate first. An out-of-range call trips a `debug_assert!`
//! in debug builds; release builds log it and leave the buffer untouched.

use crate::grapheme;
use crate::types::DirtyLines;

/// One line of the document.
///
/// The column count is cached because every caret move reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    text: String,
    columns: usize,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.contains('\n'), "a line cannot contain a newline");
        let columns = grapheme::column_count(&text);
        Self { text, columns }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in columns (grapheme clusters).
    pub fn len(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn insert(&mut self, column: usize, ch: char) {
        let at = grapheme::byte_offset(&self.text, column);
        self.text.insert(at, ch);
        self.recount();
    }

    fn remove_before(&mut self, column: usize) -> bool {
        match grapheme::range_before(&self.text, column) {
            Some(range) => {
                self.text.replace_range(range, "");
                self.recount();
                true
            }
            None => false,
        }
    }

    fn split_off(&mut self, column: usize) -> Line {
        let at = grapheme::byte_offset(&self.text, column);
        let tail = self.text.split_off(at);
        self.recount();
        Line::new(tail)
    }

    fn append(&mut self, other: Line) {
        self.text.push_str(&other.text);
        self.recount();
    }

    fn recount(&mut self) {
        self.columns = grapheme::column_count(&self.text);
    }
}

/// An ordered sequence of lines with at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
}

impl LineBuffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::default()],
        }
    }

    /// Creates a buffer from text, one line per `'\n'`-separated segment.
    ///
    /// `""` gives one empty line; a trailing newline gives a trailing empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(Line::new).collect(),
        }
    }

    // ==================== Accessors ====================

    /// Number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of a line in columns, or 0 for a line that does not exist.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Line::len)
    }

    /// Text of a line, or `""` for a line that does not exist.
    pub fn line_text(&self, idx: usize) -> &str {
        self.lines.get(idx).map_or("", Line::text)
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// Line texts in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(Line::text)
    }

    /// The longest line length in columns.
    pub fn widest_line_len(&self) -> usize {
        self.lines.iter().map(Line::len).max().unwrap_or(0)
    }

    /// The whole document with lines joined by `'\n'`.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.text.len() + 1).sum());
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.text);
        }
        out
    }

    // ==================== Contract checks ====================

    fn check_line(&self, idx: usize, op: &str) -> bool {
        let ok = idx < self.lines.len();
        debug_assert!(
            ok,
            "{op}: line {idx} out of range (line_count = {})",
            self.lines.len()
        );
        if !ok {
            log::warn!(
                "{op}: ignoring out-of-range line {idx} (line_count = {})",
                self.lines.len()
            );
        }
        ok
    }

    fn check_column(&self, idx: usize, column: usize, op: &str) -> bool {
        let len = self.lines[idx].len();
        let ok = column <= len;
        debug_assert!(ok, "{op}: column {column} past end of line {idx} (len = {len})");
        if !ok {
            log::warn!("{op}: ignoring column {column} past end of line {idx} (len = {len})");
        }
        ok
    }

    // ==================== Mutations ====================

    /// Inserts `ch` in front of `column` on line `idx`.
    pub fn insert_char(&mut self, idx: usize, column: usize, ch: char) -> DirtyLines {
        if ch == '\n' {
            return self.split_line(idx, column);
        }
        if !self.check_line(idx, "insert_char") || !self.check_column(idx, column, "insert_char")
        {
            return DirtyLines::None;
        }
        self.lines[idx].insert(column, ch);
        DirtyLines::Single(idx)
    }

    /// Removes the glyph immediately before `column` on line `idx`.
    ///
    /// Column 0 has nothing in front of it; use `merge_with_previous` there.
    pub fn delete_char_before(&mut self, idx: usize, column: usize) -> DirtyLines {
        if !self.check_line(idx, "delete_char_before")
            || !self.check_column(idx, column, "delete_char_before")
        {
            return DirtyLines::None;
        }
        if self.lines[idx].remove_before(column) {
            DirtyLines::Single(idx)
        } else {
            DirtyLines::None
        }
    }

    /// Splits line `idx` at `column`: the tail becomes a new line right after it.
    pub fn split_line(&mut self, idx: usize, column: usize) -> DirtyLines {
        if !self.check_line(idx, "split_line") || !self.check_column(idx, column, "split_line") {
            return DirtyLines::None;
        }
        let tail = self.lines[idx].split_off(column);
        self.lines.insert(idx + 1, tail);
        DirtyLines::FromLineToEnd(idx)
    }

    /// Appends line `idx` onto line `idx - 1` and removes line `idx`.
    pub fn merge_with_previous(&mut self, idx: usize) -> DirtyLines {
        if !self.check_line(idx, "merge_with_previous") {
            return DirtyLines::None;
        }
        debug_assert!(idx > 0, "merge_with_previous: the first line has no predecessor");
        if idx == 0 {
            log::warn!("merge_with_previous: ignoring merge of the first line");
            return DirtyLines::None;
        }
        let line = self.lines.remove(idx);
        self.lines[idx - 1].append(line);
        DirtyLines::FromLineToEnd(idx - 1)
    }

    /// Inserts a whole line so that it ends up at index `idx`.
    ///
    /// `idx == line_count()` appends.
    pub fn insert_line(&mut self, idx: usize, text: impl Into<String>) -> DirtyLines {
        let ok = idx <= self.lines.len();
        debug_assert!(ok, "insert_line: index {idx} past end (line_count = {})", self.lines.len());
        if !ok {
            log::warn!("insert_line: ignoring index {idx} past end");
            return DirtyLines::None;
        }
        self.lines.insert(idx, Line::new(text));
        DirtyLines::FromLineToEnd(idx)
    }

    /// Removes line `idx`. The last remaining line is never removed.
    pub fn remove_line(&mut self, idx: usize) -> DirtyLines {
        if !self.check_line(idx, "remove_line") {
            return DirtyLines::None;
        }
        if self.lines.len() == 1 {
            log::debug!("remove_line: refusing to remove the only line");
            return DirtyLines::None;
        }
        self.lines.remove(idx);
        DirtyLines::FromLineToEnd(idx.min(self.lines.len() - 1))
    }

    /// Replaces the whole document.
    pub fn replace_all(&mut self, text: &str) -> DirtyLines {
        *self = Self::from_text(text);
        DirtyLines::FromLineToEnd(0)
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(buf: &LineBuffer) -> Vec<&str> {
        buf.lines().collect()
    }

    // ==================== Construction ====================

    #[test]
    fn test_new_has_one_empty_line() {
        let buf = LineBuffer::new();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_text(0), "");
        assert_eq!(buf.line_len(0), 0);
    }

    #[test]
    fn test_from_text_splits_lines() {
        let buf = LineBuffer::from_text("a\nbb\nccc");
        assert_eq!(lines_of(&buf), vec!["a", "bb", "ccc"]);
        assert_eq!(buf.line_len(2), 3);
    }

    #[test]
    fn test_from_text_empty_and_trailing_newline() {
        assert_eq!(lines_of(&LineBuffer::from_text("")), vec![""]);
        assert_eq!(lines_of(&LineBuffer::from_text("abc\n")), vec!["abc", ""]);
    }

    #[test]
    fn test_text_round_trips() {
        let buf = LineBuffer::from_text("one\n\nthree");
        assert_eq!(buf.text(), "one\n\nthree");
    }

    #[test]
    fn test_accessors_out_of_range_are_empty() {
        let buf = LineBuffer::from_text("abc");
        assert_eq!(buf.line_len(5), 0);
        assert_eq!(buf.line_text(5), "");
        assert!(buf.line(5).is_none());
    }

    #[test]
    fn test_widest_line_len() {
        let buf = LineBuffer::from_text("a\nbbbb\ncc");
        assert_eq!(buf.widest_line_len(), 4);
    }

    // ==================== Character edits ====================

    #[test]
    fn test_insert_char_middle() {
        let mut buf = LineBuffer::from_text("hello");
        let dirty = buf.insert_char(0, 2, 'X');
        assert_eq!(dirty, DirtyLines::Single(0));
        assert_eq!(buf.line_text(0), "heXllo");
        assert_eq!(buf.line_len(0), 6);
    }

    #[test]
    fn test_insert_char_at_end() {
        let mut buf = LineBuffer::from_text("ab");
        buf.insert_char(0, 2, 'c');
        assert_eq!(buf.line_text(0), "abc");
    }

    #[test]
    fn test_insert_newline_char_splits() {
        let mut buf = LineBuffer::from_text("abcd");
        let dirty = buf.insert_char(0, 2, '\n');
        assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
        assert_eq!(lines_of(&buf), vec!["ab", "cd"]);
    }

    #[test]
    fn test_delete_char_before() {
        let mut buf = LineBuffer::from_text("abc");
        let dirty = buf.delete_char_before(0, 2);
        assert_eq!(dirty, DirtyLines::Single(0));
        assert_eq!(buf.line_text(0), "ac");
    }

    #[test]
    fn test_delete_char_before_column_zero_is_noop() {
        let mut buf = LineBuffer::from_text("abc");
        assert_eq!(buf.delete_char_before(0, 0), DirtyLines::None);
        assert_eq!(buf.line_text(0), "abc");
    }

    #[test]
    fn test_delete_removes_whole_cluster() {
        let mut buf = LineBuffer::from_text("ae\u{0301}b");
        buf.delete_char_before(0, 2);
        assert_eq!(buf.line_text(0), "ab");
        assert_eq!(buf.line_len(0), 2);
    }

    // ==================== Split / merge ====================

    #[test]
    fn test_split_line_middle() {
        let mut buf = LineBuffer::from_text("first\nhelloworld\nlast");
        let dirty = buf.split_line(1, 5);
        assert_eq!(dirty, DirtyLines::FromLineToEnd(1));
        assert_eq!(lines_of(&buf), vec!["first", "hello", "world", "last"]);
    }

    #[test]
    fn test_split_line_at_end_makes_empty_line() {
        let mut buf = LineBuffer::from_text("abc");
        buf.split_line(0, 3);
        assert_eq!(lines_of(&buf), vec!["abc", ""]);
    }

    #[test]
    fn test_merge_with_previous() {
        let mut buf = LineBuffer::from_text("ab\ncd\nef");
        let dirty = buf.merge_with_previous(1);
        assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
        assert_eq!(lines_of(&buf), vec!["abcd", "ef"]);
    }

    #[test]
    fn test_split_then_merge_restores_line() {
        let mut buf = LineBuffer::from_text("helloworld");
        buf.split_line(0, 5);
        buf.merge_with_previous(1);
        assert_eq!(lines_of(&buf), vec!["helloworld"]);
    }

    // ==================== Whole lines ====================

    #[test]
    fn test_insert_line_before() {
        let mut buf = LineBuffer::from_text("a\nb");
        let dirty = buf.insert_line(1, "");
        assert_eq!(dirty, DirtyLines::FromLineToEnd(1));
        assert_eq!(lines_of(&buf), vec!["a", "", "b"]);
    }

    #[test]
    fn test_insert_line_appends() {
        let mut buf = LineBuffer::from_text("a");
        buf.insert_line(1, "");
        assert_eq!(lines_of(&buf), vec!["a", ""]);
    }

    #[test]
    fn test_remove_line() {
        let mut buf = LineBuffer::from_text("a\n\nb");
        let dirty = buf.remove_line(1);
        assert_eq!(dirty, DirtyLines::FromLineToEnd(1));
        assert_eq!(lines_of(&buf), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_last_remaining_line_is_refused() {
        let mut buf = LineBuffer::from_text("abc");
        assert_eq!(buf.remove_line(0), DirtyLines::None);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_text(0), "abc");
    }

    #[test]
    fn test_replace_all() {
        let mut buf = LineBuffer::from_text("old");
        let dirty = buf.replace_all("x\ny");
        assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
        assert_eq!(lines_of(&buf), vec!["x", "y"]);
    }

    // ==================== Contract violations ====================

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_insert_asserts_in_debug() {
        let mut buf = LineBuffer::new();
        buf.insert_char(3, 0, 'x');
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no predecessor")]
    fn test_merge_first_line_asserts_in_debug() {
        let mut buf = LineBuffer::from_text("a\nb");
        buf.merge_with_previous(0);
    }
}
