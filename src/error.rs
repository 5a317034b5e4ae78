//! The error taxonomy shared by every command.
//!
//! Two families: input validation errors (recoverable, the user retries with
//! corrected input) and structural parse failures (fatal for the invocation,
//! because guessing would corrupt source code). Either way the command
//! aborts before mutating the buffer, and the dispatcher surfaces the
//! message through the host's notification facility.

use std::io;
use thiserror::Error;

/// Everything that can stop a command before it touches the buffer.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command's free-text argument was empty or whitespace-only.
    #[error("string must be non-empty")]
    EmptyArgument,
    /// The buffer's file kind is not supported by the import rewriter.
    #[error("file extension '.{0}' is not supported")]
    UnsupportedExtension(String),
    /// The file has no extension and no recognisable hash-bang line.
    #[error("unable to discern the file extension")]
    UnknownExtension,
    /// No comment leader is registered for this extension.
    #[error("unable to document current file - extension '{0}' is not covered")]
    UncoveredExtension(String),
    /// The import section's first line matched neither declaration grammar.
    #[error("the import section's first line must either be a require or an import\n\n{0}")]
    UnrecognizedSectionSyntax(String),
    /// An `// Imports //` banner was found without a closing banner.
    #[error("found an '// Imports //' banner without a closing banner")]
    UnterminatedSection,
    /// A line inside the declaration groups failed both grammars.
    #[error("line is not a recognised declaration: '{0}'")]
    MalformedDeclaration(String),
    /// The command needs a selection and none exists.
    #[error("nothing is selected")]
    NoSelection,
    /// The export generators only run on an index.js buffer.
    #[error("this command only works in an index.js file")]
    NotAnIndexFile,
    /// The buffer has no backing file path.
    #[error("the current buffer has no file path")]
    NoFilePath,
    /// The dispatcher was handed a name it does not know.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    /// Filesystem failure while scanning a directory.
    #[error(transparent)]
    Io(#[from] io::Error),
}
