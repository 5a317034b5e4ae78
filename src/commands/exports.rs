//! Regenerate an index.js as imports plus an export block.
//!
//! Scans the buffer's directory for loadable files, builds one sorted import
//! line per file, and replaces the whole buffer with the imports and an
//! `export { … }` or `export default { … }` block over the default names.

use crate::case::camel_case;
use crate::error::CommandError;
use crate::host::Editor;
use std::ffi::OsStr;
use std::fs;

const SUPPORTED_EXTENSIONS: &[&str] = &["js", "vue"];

/// Which export statement the regenerated index ends with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportStyle {
    /// `export { a, b }`
    Named,
    /// `export default { a, b }`
    Default,
}

/// Rewrite the index.js buffer from its directory's contents.
///
/// # Errors
///
/// [`CommandError::NotAnIndexFile`] when the buffer isn't an index.js, and
/// I/O errors from the directory scan.
pub fn run(editor: &mut dyn Editor, style: ExportStyle) -> Result<(), CommandError> {
    let path = editor.file_path().ok_or(CommandError::NoFilePath)?;
    if path.file_name().and_then(OsStr::to_str) != Some("index.js") {
        return Err(CommandError::NotAnIndexFile);
    }
    let directory = path.parent().ok_or(CommandError::NotAnIndexFile)?;

    // (import line, default name) pairs, sorted by the rendered line.
    let mut imports = Vec::new();
    for entry in fs::read_dir(directory)? {
        let file_name = entry?.file_name().to_string_lossy().into_owned();
        if file_name == "index.js" {
            continue;
        }
        let Some((stem, extension)) = file_name.rsplit_once('.') else {
            continue;
        };
        if !SUPPORTED_EXTENSIONS.contains(&extension) {
            continue;
        }
        let default_name = camel_case(stem);
        imports.push((format!("import {default_name} from './{stem}'"), default_name));
    }
    imports.sort_unstable();

    let import_lines: Vec<&str> = imports.iter().map(|(line, _)| line.as_str()).collect();
    let default_names: Vec<&str> = imports.iter().map(|(_, name)| name.as_str()).collect();
    let name_list = default_names.join(",\n  ");

    let export_block = match style {
        ExportStyle::Named => format!("export {{\n  {name_list},\n}}"),
        ExportStyle::Default => format!("export default {{\n  {name_list},\n}}"),
    };

    editor.set_text(format!("{}\n\n{export_block}\n", import_lines.join("\n")));
    Ok(())
}
