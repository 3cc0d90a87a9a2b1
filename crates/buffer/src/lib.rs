// Chunk: docs/chunks/line_buffer - Line-vector text buffer with dirty line reporting

//! caretpad-buffer: the document model for the caretpad editing widget.
//!
//! The document is an ordered vector of lines. Every mutation returns a
//! [`DirtyLines`] value so the renderer can redraw only what changed, and
//! structural edits are described to the rest of the widget as
//! [`BufferChange`] records.
//!
//! # Example
//!
//! ```
//! use caretpad_buffer::{DirtyLines, LineBuffer};
//!
//! let mut buffer = LineBuffer::from_text("helloworld");
//! let dirty = buffer.split_line(0, 5);
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
//! assert_eq!(buffer.line_count(), 2);
//! assert_eq!(buffer.line_text(1), "world");
//!
//! buffer.insert_char(1, 0, 'W');
//! assert_eq!(buffer.text(), "hello\nWworld");
//! ```
//!
//! # Columns
//!
//! Columns count grapheme clusters (see [`grapheme`]), so a caret column can
//! never point into the middle of a glyph.

pub mod grapheme;
mod line_buffer;
mod types;

pub use line_buffer::{Line, LineBuffer};
pub use types::{BufferChange, ChangeKind, DirtyLines};
