//! The import-dependency command.
//!
//! Given a typed dependency string, splice a new declaration into the
//! buffer's import section: locate the banner, partition its lines into
//! groups, insert at the sorted position, re-render, and replace the
//! document in one edit. The whole transform is pure input → output; the
//! only state that survives is the document itself.

use crate::config::Config;
use crate::error::CommandError;
use crate::host::{line_count, Editor, Position};
use crate::imports::declaration::detect_syntax;
use crate::imports::names::NameRules;
use crate::imports::partition::{partition, SectionParts};
use crate::imports::render::render_section;
use crate::imports::{insert_sorted, section, Declaration, DependencyKind, Syntax};
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

/// Insert `dep_string` into the buffer's import section.
///
/// The buffer is read once and replaced with exactly one edit; the cursor
/// row shifts by the net number of lines added or removed, the column stays
/// put.
///
/// # Errors
///
/// Validation errors ([`CommandError::EmptyArgument`],
/// [`CommandError::UnsupportedExtension`],
/// [`CommandError::UnrecognizedSectionSyntax`]) and structural failures
/// ([`CommandError::UnterminatedSection`],
/// [`CommandError::MalformedDeclaration`]); the buffer is untouched in
/// every case.
pub fn run(editor: &mut dyn Editor, config: &Config, dep_string: &str) -> Result<(), CommandError> {
    if dep_string.trim().is_empty() {
        return Err(CommandError::EmptyArgument);
    }

    let extension = editor
        .file_path()
        .as_deref()
        .and_then(Path::extension)
        .and_then(OsStr::to_str)
        .map(str::to_owned)
        .unwrap_or_default();
    if !config.import_extensions.contains(&extension) {
        return Err(CommandError::UnsupportedExtension(extension));
    }

    let old_text = editor.text();
    let old_cursor = editor.cursor();

    let located = section::locate(&old_text)?;
    let syntax = match &located {
        Some(found) => detect_syntax(&found.text)?,
        None => Syntax::Require,
    };

    let rules = NameRules::default();
    let declaration = Declaration {
        variable: rules.variable_name(dep_string),
        dep_string: dep_string.to_string(),
    };
    let kind = DependencyKind::of(&declaration.dep_string);
    debug!(
        dependency = dep_string,
        variable = %declaration.variable,
        ?syntax,
        ?kind,
        "inserting declaration"
    );

    let new_text = match located {
        None => {
            let mut parts = SectionParts::default();
            match kind {
                DependencyKind::NodeModule => parts.node_module.push(declaration),
                DependencyKind::Relative => parts.relative.push(declaration),
            }
            let body = render_section(syntax, &parts, &rules, config.promisify_fs);
            section::synthesize(&old_text, &body)
        }
        Some(found) => {
            let mut parts = partition(&found.text)?;
            let group = match kind {
                DependencyKind::NodeModule => &mut parts.node_module,
                DependencyKind::Relative => &mut parts.relative,
            };
            insert_sorted(group, declaration);
            let body = render_section(syntax, &parts, &rules, config.promisify_fs);
            format!("{}{body}{}", &old_text[..found.start], &old_text[found.end..])
        }
    };

    let old_lines = line_count(&old_text);
    let new_lines = line_count(&new_text);
    let row = if new_lines >= old_lines {
        old_cursor.row + (new_lines - old_lines)
    } else {
        old_cursor.row.saturating_sub(old_lines - new_lines)
    };

    editor.set_text(new_text);
    editor.set_cursor(Position {
        row,
        column: old_cursor.column,
    });
    Ok(())
}

#[cfg(test)]
#[path = "../tests/import_dependency.rs"]
mod tests;
