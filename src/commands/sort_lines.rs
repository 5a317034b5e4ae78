//! Sort the selected lines lexicographically.

use crate::error::CommandError;
use crate::host::{Editor, Position};

/// Expand the selection to whole lines, sort them, and splice them back.
///
/// # Errors
///
/// [`CommandError::NoSelection`] when nothing is selected.
pub fn run(editor: &mut dyn Editor) -> Result<(), CommandError> {
    let (start, end) = editor.selection().ok_or(CommandError::NoSelection)?;
    let text = editor.text();

    let mut lines: Vec<&str> = text.split('\n').collect();
    let last = end.row.min(lines.len().saturating_sub(1));
    let first = start.row.min(last);
    lines[first..=last].sort_unstable();

    editor.set_text(lines.join("\n"));
    editor.set_cursor(Position {
        row: first,
        column: 0,
    });
    Ok(())
}
