//! Line-oriented text buffer with multi-line range replacement.
//!
//! The buffer stores the document as a sequence of lines split on `\n`,
//! addressed by zero-based (row, column) positions with byte columns.

mod text;

pub use text::{BufferError, Position, TextBuffer};
