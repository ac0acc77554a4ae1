use crate::app::model::{Mode, Model, ToastLevel};

/// Direction for single-step cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Cursor
    /// Move the cursor one step
    Move(Direction),
    /// Move to the beginning of the line
    LineStart,
    /// Move to the end of the line
    LineEnd,
    /// Move to the start of the next word
    WordForward,
    /// Move to the end of the previous word
    WordBack,

    // Mode
    /// Enter insert mode at the cursor
    EnterInsert,
    /// Enter insert mode after the cursor character
    EnterInsertAfter,
    /// Leave insert mode (cursor steps back one column)
    ExitInsert,

    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Split the line at the cursor (Enter)
    InsertNewline,
    /// Delete the character before the cursor (Backspace)
    DeleteBack,
    /// Delete the character at the cursor
    DeleteAt,

    // Files
    /// Write the buffer to its file
    Save,
    /// Replace the buffer from disk
    Reload,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Toggle the help overlay
    ToggleHelp,
    /// Hide the help overlay
    HideHelp,

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    /// Whether this message mutates the buffer.
    const fn edits_buffer(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::InsertNewline | Self::DeleteBack | Self::DeleteAt
        )
    }
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here. File
/// I/O for [`Message::Save`] and [`Message::Reload`] lives in the
/// effects layer; this function only carries the pure state changes.
/// Every transition ends by re-clamping the cursor into the buffer's
/// valid domain for the current mode.
pub fn update(mut model: Model, msg: Message) -> Model {
    // A quit attempt with unsaved changes arms a confirmation flag;
    // any other action disarms it.
    if !matches!(msg, Message::Quit | Message::Save) {
        model.quit_confirmed = false;
    }

    let enters_insert = matches!(msg, Message::EnterInsert | Message::EnterInsertAfter);
    if model.readonly && (msg.edits_buffer() || enters_insert) {
        model.show_toast(ToastLevel::Warning, "Buffer is read-only");
        return model;
    }

    match msg {
        // Cursor
        Message::Move(direction) => move_cursor(&mut model, direction),
        Message::LineStart => model.cursor.col = 0,
        Message::LineEnd => {
            model.cursor.col = model.buffer.line_len(model.cursor.row);
        }
        Message::WordForward => {
            let line = model.buffer.line(model.cursor.row).unwrap_or("");
            model.cursor.col = next_word_col(line, model.cursor.col);
        }
        Message::WordBack => {
            let line = model.buffer.line(model.cursor.row).unwrap_or("");
            model.cursor.col = previous_word_col(line, model.cursor.col);
        }

        // Mode
        Message::EnterInsert => model.mode = Mode::Insert,
        Message::EnterInsertAfter => {
            model.mode = Mode::Insert;
            let line = model.buffer.line(model.cursor.row).unwrap_or("");
            model.cursor.col += next_char_len(line, model.cursor.col);
        }
        Message::ExitInsert => {
            let line = model.buffer.line(model.cursor.row).unwrap_or("");
            model.cursor.col = model
                .cursor
                .col
                .saturating_sub(prev_char_len(line, model.cursor.col));
            model.mode = Mode::Navigation;
        }

        // Editing
        Message::InsertChar(ch) => {
            let (row, col) = (model.cursor.row, model.cursor.col);
            if splice(&mut model, row, col, row, col, &ch.to_string()) {
                model.cursor.col += ch.len_utf8();
            }
        }
        Message::InsertNewline => {
            let (row, col) = (model.cursor.row, model.cursor.col);
            if splice(&mut model, row, col, row, col, "\n") {
                model.cursor.row += 1;
                model.cursor.col = 0;
            }
        }
        Message::DeleteBack => {
            let (row, col) = (model.cursor.row, model.cursor.col);
            if col == 0 && row == 0 {
                // Nothing before the start of the buffer.
            } else if col == 0 {
                let prev_len = model.buffer.line_len(row - 1);
                if splice(&mut model, row - 1, prev_len, row, 0, "") {
                    model.cursor.row -= 1;
                    model.cursor.col = prev_len;
                }
            } else {
                let line = model.buffer.line(row).unwrap_or("");
                let width = prev_char_len(line, col);
                if splice(&mut model, row, col - width, row, col, "") {
                    model.cursor.col -= width;
                }
            }
        }
        Message::DeleteAt => {
            let (row, col) = (model.cursor.row, model.cursor.col);
            if col < model.buffer.line_len(row) {
                let line = model.buffer.line(row).unwrap_or("");
                let width = next_char_len(line, col);
                splice(&mut model, row, col, row, col + width, "");
            }
        }

        // Files: handled by the effects layer.
        Message::Save | Message::Reload => {}

        // Window
        Message::Resize(width, height) => model.terminal_size = (width, height),
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        // Application
        Message::Quit => {
            if model.dirty && !model.quit_confirmed {
                model.quit_confirmed = true;
                model.show_toast(ToastLevel::Warning, "Unsaved changes; q again to quit");
            } else {
                model.should_quit = true;
            }
        }
    }

    model.clamp_cursor();
    model
}

/// Apply a range replacement, marking the buffer dirty on success.
///
/// The cursor is clamped before every command, so a rejected splice
/// means a bug in this module rather than bad user input.
fn splice(
    model: &mut Model,
    row1: usize,
    col1: usize,
    row2: usize,
    col2: usize,
    text: &str,
) -> bool {
    match model.buffer.replace_range(row1, col1, row2, col2, text) {
        Ok(()) => {
            model.dirty = true;
            true
        }
        Err(err) => {
            debug_assert!(false, "splice rejected: {err}");
            tracing::error!("splice rejected: {err}");
            false
        }
    }
}

fn move_cursor(model: &mut Model, direction: Direction) {
    match direction {
        Direction::Up => model.cursor.row = model.cursor.row.saturating_sub(1),
        Direction::Down => model.cursor.row += 1,
        Direction::Left => {
            let line = model.buffer.line(model.cursor.row).unwrap_or("");
            model.cursor.col = model
                .cursor
                .col
                .saturating_sub(prev_char_len(line, model.cursor.col));
        }
        Direction::Right => {
            let line = model.buffer.line(model.cursor.row).unwrap_or("");
            model.cursor.col += next_char_len(line, model.cursor.col);
        }
    }
}

/// Byte width of the character ending at `col`, or 1 at the line start.
fn prev_char_len(line: &str, col: usize) -> usize {
    line.get(..col)
        .and_then(|s| s.chars().next_back())
        .map_or(1, char::len_utf8)
}

/// Byte width of the character starting at `col`, or 1 at the line end.
fn next_char_len(line: &str, col: usize) -> usize {
    line.get(col..)
        .and_then(|s| s.chars().next())
        .map_or(1, char::len_utf8)
}

/// Column of the start of the next word: skip the rest of the current
/// word, then any whitespace after it.
fn next_word_col(line: &str, col: usize) -> usize {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = chars.iter().filter(|(start, _)| *start < col).count();
    while i < chars.len() && !chars[i].1.is_whitespace() {
        i += 1;
    }
    while i < chars.len() && chars[i].1.is_whitespace() {
        i += 1;
    }
    chars.get(i).map_or(line.len(), |(start, _)| *start)
}

/// Column of the end of the previous word: skip left over the current
/// word, then over the whitespace before it.
fn previous_word_col(line: &str, col: usize) -> usize {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    if chars.is_empty() {
        return 0;
    }
    let before = chars.iter().filter(|(start, _)| *start < col).count();
    let mut i = before.min(chars.len() - 1);
    while !chars[i].1.is_whitespace() {
        if i == 0 {
            return 0;
        }
        i -= 1;
    }
    while chars[i].1.is_whitespace() {
        if i == 0 {
            return 0;
        }
        i -= 1;
    }
    chars[i].0
}
