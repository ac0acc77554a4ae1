use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::buffer::{Position, TextBuffer};

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and commands; the cursor rests on a character.
    #[default]
    Navigation,
    /// Text entry; the cursor may rest one past the end of the line.
    Insert,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "NAV",
            Self::Insert => "INSERT",
        }
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The buffer is
/// mutated only through [`crate::app::update`]; the scroll position is
/// written back from the layout plan after every draw.
pub struct Model {
    /// The document being edited
    pub buffer: TextBuffer,
    /// Logical cursor position
    pub cursor: Position,
    /// Current editor mode
    pub mode: Mode,
    /// First buffer row eligible for display
    pub scroll_top: usize,
    /// Path of the file being edited, if any
    pub file_path: Option<PathBuf>,
    /// Last known terminal size (width, height)
    pub terminal_size: (u16, u16),
    /// Whether the line-number gutter is drawn
    pub show_gutter: bool,
    /// Whether editing commands are disabled
    pub readonly: bool,
    /// Whether the buffer has unsaved changes
    pub dirty: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Set after a quit attempt with unsaved changes; a second quit proceeds
    pub quit_confirmed: bool,
    toast: Option<Toast>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("cursor", &self.cursor)
            .field("mode", &self.mode)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model for the given file and initial text.
    pub fn new(file_path: Option<PathBuf>, text: &str, terminal_size: (u16, u16)) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            cursor: Position::zero(),
            mode: Mode::Navigation,
            scroll_top: 0,
            file_path,
            terminal_size,
            show_gutter: true,
            readonly: false,
            dirty: false,
            should_quit: false,
            help_visible: false,
            quit_confirmed: false,
            toast: None,
        }
    }

    /// Show a transient status message.
    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    /// The active toast message and its level, if one is showing.
    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|t| (t.message.as_str(), t.level))
    }

    /// Drop the toast once its deadline passes. Returns `true` when the
    /// toast was removed and the screen needs a repaint.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            return true;
        }
        false
    }

    /// Pull the cursor back into the valid domain for the current mode.
    ///
    /// One rule everywhere: the row clamps into the buffer, then the
    /// column clamps to the last character start in Navigation mode or
    /// to the end of the line in Insert mode, landing on a character
    /// boundary either way.
    pub fn clamp_cursor(&mut self) {
        self.cursor.row = self.cursor.row.min(self.buffer.line_count() - 1);
        let line = self.buffer.line(self.cursor.row).unwrap_or("");
        let max_col = match self.mode {
            Mode::Insert => line.len(),
            Mode::Navigation => line.char_indices().next_back().map_or(0, |(i, _)| i),
        };
        let mut col = self.cursor.col.min(max_col);
        while col > 0 && !line.is_char_boundary(col) {
            col -= 1;
        }
        self.cursor.col = col;
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(None, "", (0, 0))
    }
}
