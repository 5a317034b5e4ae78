//! Line grammars for recognising declarations.
//!
//! Three fixed shapes are understood: plain requires (with `const` or
//! comma-continuation prefixes and `,`/`;` terminators), pify-wrapped
//! requires, and `import … from …;` statements. Anything else inside the
//! section is "rest" and passes through verbatim.

use crate::case::lower_first;
use crate::error::CommandError;
use crate::imports::{Declaration, Syntax};
use regex::Regex;
use std::sync::LazyLock;

static REQUIRE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:const| ) ([A-Za-z_$][A-Za-z0-9_$]*) = require\('([./\\_$\-@A-Za-z0-9]+)'\)[,;]?$")
        .expect("require grammar compiles")
});

static PIFIED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:const| ) p([A-Za-z0-9_$]+) = pify\(require\('([./\\_$\-@A-Za-z0-9]+)'\)\)[,;]?$",
    )
    .expect("pified require grammar compiles")
});

static IMPORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^import ([A-Za-z_$][A-Za-z0-9_$]*) from '([./\\_$\-@A-Za-z0-9]+)';?$")
        .expect("import grammar compiles")
});

/// Recognise one line as a declaration, or `None` for a "rest" line.
///
/// Pify-wrapped lines give back the underlying variable name (`pFs` parses
/// as `fs`) so sorting and re-rendering see the same declaration the
/// renderer produced it from.
#[must_use]
pub fn parse_line(line: &str) -> Option<(Declaration, Syntax)> {
    if let Some(captures) = REQUIRE_LINE.captures(line) {
        return Some((
            Declaration {
                variable: captures[1].to_string(),
                dep_string: captures[2].to_string(),
            },
            Syntax::Require,
        ));
    }
    if let Some(captures) = PIFIED_LINE.captures(line) {
        return Some((
            Declaration {
                variable: lower_first(&captures[1]),
                dep_string: captures[2].to_string(),
            },
            Syntax::Require,
        ));
    }
    if let Some(captures) = IMPORT_LINE.captures(line) {
        return Some((
            Declaration {
                variable: captures[1].to_string(),
                dep_string: captures[2].to_string(),
            },
            Syntax::Import,
        ));
    }
    None
}

/// Judge the section's syntax from its first line.
///
/// An empty or absent section defaults to `require` (the fixed default);
/// anything else must classify, because guessing would corrupt the file.
///
/// # Errors
///
/// [`CommandError::UnrecognizedSectionSyntax`] when the first line matches
/// neither grammar; the message carries the section text for the
/// notification.
pub fn detect_syntax(section_text: &str) -> Result<Syntax, CommandError> {
    if section_text.trim().is_empty() {
        return Ok(Syntax::Require);
    }
    let first_line = section_text.split('\n').next().unwrap_or_default();
    match parse_line(first_line) {
        Some((_, syntax)) => Ok(syntax),
        None => Err(CommandError::UnrecognizedSectionSyntax(
            section_text.to_string(),
        )),
    }
}
