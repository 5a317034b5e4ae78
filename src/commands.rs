//! Command registry and dispatch.
//!
//! Every command is a short, synchronous transform over the active buffer,
//! invoked by name with at most one free-text argument. The dispatcher is
//! the single place failures surface, so no error path can slip through
//! unreported and no error ever mutates the buffer.

pub mod banner;
pub mod cases;
pub mod exports;
pub mod import_dependency;
pub mod snippets;
pub mod sort_lines;

use crate::config::Config;
use crate::error::CommandError;
use crate::host::Editor;
use tracing::debug;

/// Registry entry describing one command.
pub struct CommandSpec {
    /// Invocation name, as bound to a keystroke or palette entry by the host.
    pub name: &'static str,
    /// Human-facing name.
    pub display_name: &'static str,
    /// Prompt label for the free-text argument, when the command takes one.
    pub argument: Option<&'static str>,
}

/// Every command pilcrow registers with a host.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "doc-curline",
        display_name: "Doc Current Line",
        argument: None,
    },
    CommandSpec {
        name: "doc-export",
        display_name: "Doc Exports",
        argument: None,
    },
    CommandSpec {
        name: "doc-helper",
        display_name: "Doc Helper Functions",
        argument: None,
    },
    CommandSpec {
        name: "doc-import",
        display_name: "Doc Imports",
        argument: None,
    },
    CommandSpec {
        name: "doc-init",
        display_name: "Doc Init",
        argument: None,
    },
    CommandSpec {
        name: "doc-main",
        display_name: "Doc Main",
        argument: None,
    },
    CommandSpec {
        name: "export-default",
        display_name: "Export Default Of All Files In Directory",
        argument: None,
    },
    CommandSpec {
        name: "export-named",
        display_name: "Export Named Of All Files In Directory",
        argument: None,
    },
    CommandSpec {
        name: "import-dependency",
        display_name: "Import Dependency",
        argument: Some("Name"),
    },
    CommandSpec {
        name: "jlog",
        display_name: "JLog",
        argument: Some("Variable Name"),
    },
    CommandSpec {
        name: "log",
        display_name: "Log",
        argument: Some("Variable Name"),
    },
    CommandSpec {
        name: "sort-lines",
        display_name: "Sort Selected Lines",
        argument: None,
    },
    CommandSpec {
        name: "tee",
        display_name: "Tee",
        argument: Some("Variable Name"),
    },
    CommandSpec {
        name: "to-camel-case",
        display_name: "To Camel Case",
        argument: None,
    },
    CommandSpec {
        name: "to-kebab-case",
        display_name: "To Kebab Case",
        argument: None,
    },
];

/// Run one command by name, surfacing any failure through the host.
///
/// # Errors
///
/// Returns the command's error after reporting it via `notify_error`
/// exactly once; the buffer is untouched on every error path.
pub fn run(
    editor: &mut dyn Editor,
    config: &Config,
    name: &str,
    argument: &str,
) -> Result<(), CommandError> {
    debug!(command = name, "dispatching");
    let result = match name {
        "doc-curline" => banner::doc_curline(editor),
        "doc-export" => banner::doc_title(editor, "Exports", true),
        "doc-helper" => banner::doc_title(editor, "Helper Functions", true),
        "doc-import" => banner::doc_title(editor, "Imports", false),
        "doc-init" => banner::doc_title(editor, "Init", true),
        "doc-main" => banner::doc_title(editor, "Main", true),
        "export-default" => exports::run(editor, exports::ExportStyle::Default),
        "export-named" => exports::run(editor, exports::ExportStyle::Named),
        "import-dependency" => import_dependency::run(editor, config, argument),
        "jlog" => snippets::jlog(editor, argument),
        "log" => snippets::log(editor, argument),
        "sort-lines" => sort_lines::run(editor),
        "tee" => snippets::tee(editor, argument),
        "to-camel-case" => cases::to_camel_case(editor),
        "to-kebab-case" => cases::to_kebab_case(editor),
        _ => Err(CommandError::UnknownCommand(name.to_string())),
    };

    if let Err(error) = &result {
        editor.notify_error(&error.to_string());
    }
    result
}

#[cfg(test)]
#[path = "tests/commands.rs"]
mod tests;
