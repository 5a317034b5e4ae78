//! console.log snippet insertion (log, jlog, tee).

use crate::error::CommandError;
use crate::host::{self, Editor};

fn jstring(name: &str) -> String {
    format!("JSON.stringify({name}, null, 2)")
}

fn jlog_expression(name: &str) -> String {
    format!("console.log('{name}: ' + {})", jstring(name))
}

fn validated(variable: &str) -> Result<&str, CommandError> {
    if variable.trim().is_empty() {
        Err(CommandError::EmptyArgument)
    } else {
        Ok(variable)
    }
}

/// Insert `console.log('x: ' + x);` for a variable name.
///
/// # Errors
///
/// [`CommandError::EmptyArgument`] for an empty variable name.
pub fn log(editor: &mut dyn Editor, variable: &str) -> Result<(), CommandError> {
    let variable = validated(variable)?;
    host::insert_text(
        editor,
        &format!("console.log('{variable}: ' + {variable});"),
    );
    Ok(())
}

/// Insert a `JSON.stringify` log statement for a variable name.
///
/// # Errors
///
/// [`CommandError::EmptyArgument`] for an empty variable name.
pub fn jlog(editor: &mut dyn Editor, variable: &str) -> Result<(), CommandError> {
    let variable = validated(variable)?;
    host::insert_text(editor, &format!("{};", jlog_expression(variable)));
    Ok(())
}

/// Insert the pass-through arrow form: `x => console.log(…) || x`.
///
/// # Errors
///
/// [`CommandError::EmptyArgument`] for an empty variable name.
pub fn tee(editor: &mut dyn Editor, variable: &str) -> Result<(), CommandError> {
    let variable = validated(variable)?;
    host::insert_text(
        editor,
        &format!("{variable} => {} || {variable}", jlog_expression(variable)),
    );
    Ok(())
}
