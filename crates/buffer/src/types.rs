// Chunk: docs/chunks/line_buffer - Line-vector text buffer with dirty line reporting
// Chunk: docs/chunks/buffer_change_events - Structured buffer change records

/// Which lines were dirtied by a mutation, in 0-based buffer coordinates.
///
/// Every `LineBuffer` mutation returns one of these so a renderer can redraw
/// only what changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyLines {
    /// Nothing changed (a rejected edit).
    #[default]
    None,
    /// One line changed in place.
    Single(usize),
    /// Lines `[from, to)` changed.
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the buffer changed.
    /// Splits, merges and line insertion/removal shift every following line.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the first dirty line, if any.
    pub fn start_line(&self) -> Option<usize> {
        match *self {
            DirtyLines::None => None,
            DirtyLines::Single(line) | DirtyLines::FromLineToEnd(line) => Some(line),
            DirtyLines::Range { from, .. } => Some(from),
        }
    }

    /// Returns true if `line` falls inside the dirty region.
    pub fn covers(&self, line: usize) -> bool {
        match *self {
            DirtyLines::None => false,
            DirtyLines::Single(l) => l == line,
            DirtyLines::Range { from, to } => (from..to).contains(&line),
            DirtyLines::FromLineToEnd(from) => line >= from,
        }
    }

    /// Widens this region so it also covers `other`.
    ///
    /// The editor merges the result of every transition between two frames,
    /// so the renderer sees one region per frame.
    pub fn merge(&mut self, other: DirtyLines) {
        let Some(other_start) = other.start_line() else {
            return;
        };
        let Some(self_start) = self.start_line() else {
            *self = other;
            return;
        };
        let start = self_start.min(other_start);

        *self = match (*self, other) {
            (DirtyLines::FromLineToEnd(_), _) | (_, DirtyLines::FromLineToEnd(_)) => {
                DirtyLines::FromLineToEnd(start)
            }
            (DirtyLines::Single(a), DirtyLines::Single(b)) if a == b => DirtyLines::Single(a),
            (a, b) => DirtyLines::Range {
                from: start,
                to: a.end_exclusive().max(b.end_exclusive()),
            },
        };
    }

    fn end_exclusive(&self) -> usize {
        match *self {
            DirtyLines::Single(line) => line + 1,
            DirtyLines::Range { to, .. } => to,
            DirtyLines::None | DirtyLines::FromLineToEnd(_) => 0,
        }
    }
}

/// What kind of structural edit a `BufferChange` describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A line was inserted (Enter).
    LineAdded,
    /// A line was removed, either deleted or merged into its predecessor.
    LineRemoved,
    /// Text inside one line changed (typing, backspace within a line).
    LineEdited,
    /// The whole document was replaced.
    Replaced,
}

/// A "buffer changed" record: the edit kind plus the affected 0-based line.
///
/// For `LineAdded` the index is the new line, for `LineRemoved` it is the
/// index the removed line had before removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferChange {
    pub kind: ChangeKind,
    pub index: usize,
}

impl BufferChange {
    pub fn new(kind: ChangeKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Returns the signed change in line count caused by this edit, or `None`
    /// when the edit is not a single-line insertion or removal.
    pub fn line_delta(&self) -> Option<i32> {
        match self.kind {
            ChangeKind::LineAdded => Some(1),
            ChangeKind::LineRemoved => Some(-1),
            ChangeKind::LineEdited => Some(0),
            ChangeKind::Replaced => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Merge ====================

    #[test]
    fn merge_none_is_identity() {
        let mut d = DirtyLines::None;
        d.merge(DirtyLines::Single(5));
        assert_eq!(d, DirtyLines::Single(5));

        d.merge(DirtyLines::None);
        assert_eq!(d, DirtyLines::Single(5));
    }

    #[test]
    fn merge_same_single() {
        let mut d = DirtyLines::Single(3);
        d.merge(DirtyLines::Single(3));
        assert_eq!(d, DirtyLines::Single(3));
    }

    #[test]
    fn merge_distant_singles_in_either_order() {
        let mut d = DirtyLines::Single(10);
        d.merge(DirtyLines::Single(3));
        assert_eq!(d, DirtyLines::Range { from: 3, to: 11 });
    }

    #[test]
    fn merge_single_into_range() {
        let mut d = DirtyLines::Range { from: 5, to: 10 };
        d.merge(DirtyLines::Single(12));
        assert_eq!(d, DirtyLines::Range { from: 5, to: 13 });
    }

    #[test]
    fn merge_from_line_to_end_absorbs() {
        let mut d = DirtyLines::Range { from: 2, to: 4 };
        d.merge(DirtyLines::FromLineToEnd(7));
        assert_eq!(d, DirtyLines::FromLineToEnd(2));

        let mut d = DirtyLines::FromLineToEnd(7);
        d.merge(DirtyLines::Single(9));
        assert_eq!(d, DirtyLines::FromLineToEnd(7));
    }

    // ==================== Covers ====================

    #[test]
    fn covers_matches_each_variant() {
        assert!(!DirtyLines::None.covers(0));
        assert!(DirtyLines::Single(2).covers(2));
        assert!(!DirtyLines::Single(2).covers(3));
        assert!(DirtyLines::Range { from: 1, to: 3 }.covers(2));
        assert!(!DirtyLines::Range { from: 1, to: 3 }.covers(3));
        assert!(DirtyLines::FromLineToEnd(4).covers(100));
        assert!(!DirtyLines::FromLineToEnd(4).covers(3));
    }

    // ==================== BufferChange ====================

    #[test]
    fn line_delta_per_kind() {
        assert_eq!(BufferChange::new(ChangeKind::LineAdded, 0).line_delta(), Some(1));
        assert_eq!(BufferChange::new(ChangeKind::LineRemoved, 1).line_delta(), Some(-1));
        assert_eq!(BufferChange::new(ChangeKind::LineEdited, 1).line_delta(), Some(0));
        assert_eq!(BufferChange::new(ChangeKind::Replaced, 0).line_delta(), None);
    }
}
