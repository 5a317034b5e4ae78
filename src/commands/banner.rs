//! Comment banner insertion (the doc-* commands).
//!
//! Replaces the cursor's line with a bordered banner in the file's comment
//! style. `doc-curline` banners the line's own text; the named variants use
//! fixed section titles.

use crate::error::CommandError;
use crate::host::{Editor, Position};
use regex::Regex;
use std::ffi::OsStr;
use std::sync::LazyLock;

const COMMENT_LEADERS: &[(&str, &str)] = &[
    ("js", "//"),
    ("lua", "--"),
    ("scss", "//"),
    ("sh", "#"),
    ("sql", "--"),
    ("vue", "//"),
];

static HASH_BANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#!.*(ba|z)?sh$").expect("hash-bang pattern compiles"));

fn comment_leader(editor: &dyn Editor) -> Result<&'static str, CommandError> {
    let path = editor.file_path().ok_or(CommandError::NoFilePath)?;
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_owned)
        .or_else(|| {
            // No extension: sniff the hash-bang line for a shell script.
            let text = editor.text();
            let first_line = text.split('\n').next().unwrap_or_default();
            HASH_BANG.is_match(first_line).then(|| "sh".to_string())
        })
        .ok_or(CommandError::UnknownExtension)?;

    COMMENT_LEADERS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, leader)| *leader)
        .ok_or(CommandError::UncoveredExtension(extension))
}

fn banner_lines(leader: &str, title: &str, spaced: bool) -> Vec<String> {
    let border = format!("{leader}{}{leader}", "-".repeat(title.len() + 2));
    let mut lines = Vec::new();
    if spaced && leader == "//" {
        lines.push(leader.to_string());
    }
    lines.push(border.clone());
    lines.push(format!("{leader} {title} {leader}"));
    lines.push(border);
    lines.push(String::new());
    lines
}

fn replace_cursor_line(editor: &mut dyn Editor, title: &str, spaced: bool) -> Result<(), CommandError> {
    let leader = comment_leader(editor)?;
    let text = editor.text();
    let cursor = editor.cursor();

    let mut lines: Vec<String> = text.split('\n').map(ToString::to_string).collect();
    let row = cursor.row.min(lines.len().saturating_sub(1));
    let banner = banner_lines(leader, title, spaced);
    let inserted = banner.len();
    lines.splice(row..=row, banner);

    editor.set_text(lines.join("\n"));
    // Land on the blank line after the banner.
    editor.set_cursor(Position {
        row: row + inserted - 1,
        column: 0,
    });
    Ok(())
}

/// Replace the cursor's line with a banner of that line's own text.
///
/// # Errors
///
/// Propagates the comment-leader lookup failures: no file path, no
/// discernible extension, or an extension with no registered leader.
pub fn doc_curline(editor: &mut dyn Editor) -> Result<(), CommandError> {
    let text = editor.text();
    let row = editor.cursor().row;
    let title = text.split('\n').nth(row).unwrap_or_default().to_string();
    replace_cursor_line(editor, &title, true)
}

/// Replace the cursor's line with a banner of a fixed section title.
///
/// `spaced` prepends a bare leader line for breathing room; the Imports
/// banner goes without it so the section locator's pattern stays anchored.
///
/// # Errors
///
/// Propagates the comment-leader lookup failures: no file path, no
/// discernible extension, or an extension with no registered leader.
pub fn doc_title(editor: &mut dyn Editor, title: &str, spaced: bool) -> Result<(), CommandError> {
    replace_cursor_line(editor, title, spaced)
}
