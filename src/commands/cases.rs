//! Selection case conversion.

use crate::case::{camel_case, kebab_case};
use crate::error::CommandError;
use crate::host::{self, Editor};

fn convert(editor: &mut dyn Editor, conversion: fn(&str) -> String) -> Result<(), CommandError> {
    let (start, end) = editor.selection().ok_or(CommandError::NoSelection)?;
    let text = editor.text();
    let selected = &text[host::offset_at(&text, start)..host::offset_at(&text, end)];
    let converted = conversion(selected);
    host::insert_text(editor, &converted);
    Ok(())
}

/// Replace the selection with its camel-cased form.
///
/// # Errors
///
/// [`CommandError::NoSelection`] when nothing is selected.
pub fn to_camel_case(editor: &mut dyn Editor) -> Result<(), CommandError> {
    convert(editor, camel_case)
}

/// Replace the selection with its kebab-cased form.
///
/// # Errors
///
/// [`CommandError::NoSelection`] when nothing is selected.
pub fn to_kebab_case(editor: &mut dyn Editor) -> Result<(), CommandError> {
    convert(editor, kebab_case)
}
