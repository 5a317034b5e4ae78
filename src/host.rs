//! The host editor interface and its in-memory implementation.
//!
//! Commands never talk to an editor directly: they consume the [`Editor`]
//! trait, so a real editor integration, the CLI's file-backed buffer, and
//! tests all host the same code. The buffer is read once per command and
//! replaced with exactly one `set_text` call, so no partial edit is ever
//! observable.

use std::path::PathBuf;

/// A zero-indexed row/column coordinate in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Line index.
    pub row: usize,
    /// Character offset within the line.
    pub column: usize,
}

/// The slice of editor functionality the commands consume.
pub trait Editor {
    /// Full text of the active buffer.
    fn text(&self) -> String;
    /// Replace the buffer wholesale.
    fn set_text(&mut self, text: String);
    /// Current cursor position.
    fn cursor(&self) -> Position;
    /// Move the cursor.
    fn set_cursor(&mut self, position: Position);
    /// Path backing the buffer, when it has been saved.
    fn file_path(&self) -> Option<PathBuf>;
    /// Current selection as `(start, end)` with `start <= end`, when any.
    fn selection(&self) -> Option<(Position, Position)>;
    /// Surface a short human-readable error; must not mutate the buffer.
    fn notify_error(&mut self, message: &str);
}

/// In-memory host used by the CLI and by tests.
pub struct BufferEditor {
    text: String,
    cursor: Position,
    selection: Option<(Position, Position)>,
    path: Option<PathBuf>,
    notifications: Vec<String>,
}

impl BufferEditor {
    /// Create a buffer with the cursor at the origin and no selection.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: Position { row: 0, column: 0 },
            selection: None,
            path: None,
            notifications: Vec::new(),
        }
    }

    /// Attach the backing file path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Place the cursor.
    #[must_use]
    pub fn with_cursor(mut self, position: Position) -> Self {
        self.cursor = position;
        self
    }

    /// Select a region (`start` must not come after `end`).
    #[must_use]
    pub fn with_selection(mut self, start: Position, end: Position) -> Self {
        self.selection = Some((start, end));
        self
    }

    /// Every message surfaced through `notify_error`, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }
}

impl Editor for BufferEditor {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, position: Position) {
        self.cursor = position;
    }

    fn file_path(&self) -> Option<PathBuf> {
        self.path.clone()
    }

    fn selection(&self) -> Option<(Position, Position)> {
        self.selection
    }

    fn notify_error(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// Number of lines in `text`, counting a trailing newline's empty line.
#[must_use]
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Byte offset of a position, clamping the column to the line's length.
#[must_use]
pub fn offset_at(text: &str, position: Position) -> usize {
    let mut offset = 0;
    for (row, line) in text.split('\n').enumerate() {
        if row == position.row {
            return offset + position.column.min(line.len());
        }
        offset += line.len() + 1;
    }
    text.len()
}

/// Position of a byte offset, clamped to the end of the text.
#[must_use]
pub fn position_at(text: &str, offset: usize) -> Position {
    let clamped = offset.min(text.len());
    let before = &text[..clamped];
    let row = before.matches('\n').count();
    let column = clamped - before.rfind('\n').map_or(0, |i| i + 1);
    Position { row, column }
}

/// Replace the selection with `snippet`, or insert it at the cursor.
///
/// Mirrors the host-editor `insertText` contract: the cursor lands at the
/// end of the inserted text.
pub fn insert_text(editor: &mut dyn Editor, snippet: &str) {
    let text = editor.text();
    let (start, end) = match editor.selection() {
        Some((anchor, head)) => (offset_at(&text, anchor), offset_at(&text, head)),
        None => {
            let cursor = offset_at(&text, editor.cursor());
            (cursor, cursor)
        }
    };

    let new_text = format!("{}{}{}", &text[..start], snippet, &text[end..]);
    let cursor = position_at(&new_text, start + snippet.len());
    editor.set_text(new_text);
    editor.set_cursor(cursor);
}
