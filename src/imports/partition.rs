//! Greedy three-way split of the section's lines.
//!
//! The scan takes the leading run of blank-or-nodeModule lines, then every
//! declaration up to the last one in the text, and leaves the remainder as
//! rest lines. It assumes the file already follows the
//! nodeModule → relative → rest ordering; it never re-sorts across a group
//! boundary.

use crate::error::CommandError;
use crate::imports::{declaration, Declaration, DependencyKind};

/// The section's lines split into ordered groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionParts {
    /// Declarations whose dependency string names an installed package.
    pub node_module: Vec<Declaration>,
    /// Declarations loading a path relative to the current file.
    pub relative: Vec<Declaration>,
    /// Unrecognised trailing lines, preserved verbatim after both groups.
    pub rest: Vec<String>,
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn kind_of(line: &str) -> Option<DependencyKind> {
    declaration::parse_line(line).map(|(d, _)| DependencyKind::of(&d.dep_string))
}

fn parse_declaration(line: &str) -> Result<Declaration, CommandError> {
    declaration::parse_line(line)
        .map(|(d, _)| d)
        .ok_or_else(|| CommandError::MalformedDeclaration(line.to_string()))
}

/// Split section text into nodeModule, relative, and rest groups.
///
/// Blank-only lines at the edges of the rest block are dropped: the greedy
/// scan absorbs the separator line between the declaration groups and the
/// rest block, and the renderer re-inserts separators on the way out.
///
/// # Errors
///
/// [`CommandError::MalformedDeclaration`] when a non-blank line between the
/// leading nodeModule run and the last declaration matches neither grammar.
pub fn partition(text: &str) -> Result<SectionParts, CommandError> {
    let lines: Vec<&str> = text.split('\n').collect();

    let node_end = lines
        .iter()
        .take_while(|line| is_blank(line) || kind_of(line) == Some(DependencyKind::NodeModule))
        .count();

    let rest_start = lines
        .iter()
        .rposition(|line| kind_of(line).is_some())
        .map_or(node_end, |last| (last + 1).max(node_end));

    let node_module = lines[..node_end]
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| parse_declaration(line))
        .collect::<Result<Vec<_>, _>>()?;

    let relative = lines[node_end..rest_start]
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| parse_declaration(line))
        .collect::<Result<Vec<_>, _>>()?;

    let mut rest: Vec<String> = lines[rest_start..]
        .iter()
        .map(ToString::to_string)
        .collect();
    while rest.first().is_some_and(|line| is_blank(line)) {
        rest.remove(0);
    }
    while rest.last().is_some_and(|line| is_blank(line)) {
        rest.pop();
    }

    Ok(SectionParts {
        node_module,
        relative,
        rest,
    })
}
