use thiserror::Error;

/// Cursor or range endpoint in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based byte offset within the line.
    pub col: usize,
}

impl Position {
    /// Create a position at a specific row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The origin position (0, 0).
    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::zero()
    }
}

/// Error raised when a range-replace precondition is violated.
///
/// Callers are expected to clamp positions before handing them to the
/// buffer, so seeing this error indicates a bug in the calling code
/// rather than a user-facing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A row/column pair fell outside the buffer domain, or the range
    /// start came after the range end.
    #[error("position {row}:{col} out of range")]
    PositionOutOfRange {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
    },
}

/// A text document stored as an ordered sequence of lines.
///
/// The sequence always holds at least one line; an empty document is a
/// single empty line. All mutation goes through [`TextBuffer::replace_range`],
/// which validates its endpoints before touching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    /// Create an empty buffer (one empty line).
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a buffer from a text blob, split on `\n`.
    ///
    /// Splitting any string yields at least one element, so the one-line
    /// invariant holds even for empty input.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Replace the entire contents from a text blob (e.g. after reload).
    pub fn load(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_owned).collect();
    }

    /// An owned copy of the line sequence, in document order.
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.clone()
    }

    /// The line sequence as a slice.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines; always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The content of a line, if the row exists.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Byte length of a line, or 0 for a row outside the buffer.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, String::len)
    }

    /// The full document joined with `\n`, as written to disk.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the span between two positions with `replacement`.
    ///
    /// The text from `(row1, col1)` up to `(row2, col2)` is removed and
    /// `replacement` spliced in; newlines in the replacement introduce new
    /// lines. Deletion is replacement with an empty string, insertion is a
    /// replacement whose start and end coincide.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PositionOutOfRange`] when either endpoint is
    /// outside the buffer domain, does not lie on a character boundary, or
    /// the start comes after the end in row-major order. The buffer is
    /// left untouched on error.
    pub fn replace_range(
        &mut self,
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
        replacement: &str,
    ) -> Result<(), BufferError> {
        self.check_position(row1, col1)?;
        self.check_position(row2, col2)?;
        if (row1, col1) > (row2, col2) {
            return Err(BufferError::PositionOutOfRange {
                row: row1,
                col: col1,
            });
        }

        let merged = format!(
            "{}{}{}",
            &self.lines[row1][..col1],
            replacement,
            &self.lines[row2][col2..]
        );
        self.lines
            .splice(row1..=row2, merged.split('\n').map(str::to_owned));
        Ok(())
    }

    fn check_position(&self, row: usize, col: usize) -> Result<(), BufferError> {
        let valid = self
            .lines
            .get(row)
            .is_some_and(|line| col <= line.len() && line.is_char_boundary(col));
        if valid {
            Ok(())
        } else {
            Err(BufferError::PositionOutOfRange { row, col })
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = TextBuffer::new();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(0), Some(""));
    }

    #[test]
    fn test_from_empty_text_has_one_line() {
        let buf = TextBuffer::from_text("");
        assert_eq!(buf.snapshot(), vec![String::new()]);
    }

    #[test]
    fn test_from_text_splits_on_newline() {
        let buf = TextBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line(0), Some("hello"));
        assert_eq!(buf.line(1), Some("world"));
    }

    #[test]
    fn test_trailing_newline_yields_trailing_empty_line() {
        let buf = TextBuffer::from_text("hello\n");
        assert_eq!(buf.snapshot(), vec!["hello".to_string(), String::new()]);
    }

    #[test]
    fn test_line_out_of_bounds_returns_none() {
        let buf = TextBuffer::from_text("hello");
        assert_eq!(buf.line(1), None);
        assert_eq!(buf.line_len(1), 0);
    }

    #[test]
    fn test_to_text_roundtrip() {
        let content = "line one\nline two\n\nline four";
        let buf = TextBuffer::from_text(content);
        assert_eq!(buf.to_text(), content);
    }

    #[test]
    fn test_load_replaces_contents_wholesale() {
        let mut buf = TextBuffer::from_text("old");
        buf.load("new\ncontent");
        assert_eq!(buf.snapshot(), vec!["new".to_string(), "content".to_string()]);
    }

    // --- Splice semantics ---

    #[test]
    fn test_splice_across_two_lines() {
        let mut buf = TextBuffer::from_text("abc\ndef");
        buf.replace_range(0, 1, 1, 2, "XY").unwrap();
        assert_eq!(buf.snapshot(), vec!["aXYf".to_string()]);
    }

    #[test]
    fn test_insert_with_newline_splits_line() {
        let mut buf = TextBuffer::from_text("ab");
        buf.replace_range(0, 1, 0, 1, "\nZ").unwrap();
        assert_eq!(buf.snapshot(), vec!["a".to_string(), "Zb".to_string()]);
    }

    #[test]
    fn test_delete_everything_keeps_one_line() {
        let mut buf = TextBuffer::from_text("");
        buf.replace_range(0, 0, 0, 0, "").unwrap();
        assert_eq!(buf.snapshot(), vec![String::new()]);
    }

    #[test]
    fn test_replace_span_with_itself_is_identity() {
        let mut buf = TextBuffer::from_text("hello\nworld");
        let before = buf.snapshot();
        buf.replace_range(0, 2, 1, 3, "llo\nwor").unwrap();
        assert_eq!(buf.snapshot(), before);
    }

    #[test]
    fn test_single_char_insert() {
        let mut buf = TextBuffer::from_text("hllo");
        buf.replace_range(0, 1, 0, 1, "e").unwrap();
        assert_eq!(buf.line(0), Some("hello"));
    }

    #[test]
    fn test_single_char_delete() {
        let mut buf = TextBuffer::from_text("heello");
        buf.replace_range(0, 1, 0, 2, "").unwrap();
        assert_eq!(buf.line(0), Some("hello"));
    }

    #[test]
    fn test_join_lines_by_deleting_newline() {
        let mut buf = TextBuffer::from_text("hello\nworld");
        buf.replace_range(0, 5, 1, 0, "").unwrap();
        assert_eq!(buf.snapshot(), vec!["helloworld".to_string()]);
    }

    #[test]
    fn test_delete_whole_middle_line() {
        let mut buf = TextBuffer::from_text("a\nb\nc");
        buf.replace_range(1, 0, 2, 0, "").unwrap();
        assert_eq!(buf.snapshot(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_multiline_replacement_grows_buffer() {
        let mut buf = TextBuffer::from_text("ab");
        buf.replace_range(0, 1, 0, 1, "1\n2\n3").unwrap();
        assert_eq!(
            buf.snapshot(),
            vec!["a1".to_string(), "2".to_string(), "3b".to_string()]
        );
    }

    #[test]
    fn test_length_postcondition() {
        let mut buf = TextBuffer::from_text("a\nb\nc\nd");
        let before = buf.line_count();
        // Replaces rows 1..=2 with a two-line segment: net length unchanged.
        buf.replace_range(1, 0, 2, 1, "x\ny").unwrap();
        assert_eq!(buf.line_count(), before);
    }

    // --- Validation ---

    #[test]
    fn test_row_out_of_range_errors() {
        let mut buf = TextBuffer::from_text("hello");
        let err = buf.replace_range(1, 0, 1, 0, "x").unwrap_err();
        assert_eq!(err, BufferError::PositionOutOfRange { row: 1, col: 0 });
    }

    #[test]
    fn test_col_past_line_end_errors() {
        let mut buf = TextBuffer::from_text("hello");
        assert!(buf.replace_range(0, 6, 0, 6, "x").is_err());
    }

    #[test]
    fn test_col_equal_line_len_is_valid() {
        let mut buf = TextBuffer::from_text("hello");
        buf.replace_range(0, 5, 0, 5, "!").unwrap();
        assert_eq!(buf.line(0), Some("hello!"));
    }

    #[test]
    fn test_inverted_range_errors() {
        let mut buf = TextBuffer::from_text("hello\nworld");
        assert!(buf.replace_range(1, 0, 0, 5, "").is_err());
        assert!(buf.replace_range(0, 3, 0, 2, "").is_err());
    }

    #[test]
    fn test_error_leaves_buffer_unchanged() {
        let mut buf = TextBuffer::from_text("hello\nworld");
        let before = buf.snapshot();
        // End position is invalid; the valid start must not be applied.
        let _ = buf.replace_range(0, 2, 5, 0, "XXX");
        assert_eq!(buf.snapshot(), before);
    }

    #[test]
    fn test_non_char_boundary_col_errors() {
        let mut buf = TextBuffer::from_text("café");
        // 'é' starts at byte 3 and is two bytes wide; byte 4 is mid-char.
        assert!(buf.replace_range(0, 4, 0, 4, "x").is_err());
    }

    #[test]
    fn test_multibyte_splice_on_boundary() {
        let mut buf = TextBuffer::from_text("café");
        buf.replace_range(0, 3, 0, 5, "e").unwrap();
        assert_eq!(buf.line(0), Some("cafe"));
    }
}
