//! The import-section rewriter.
//!
//! Locates the banner-delimited imports block of a JavaScript file,
//! classifies its lines against a handful of fixed grammars, inserts a new
//! declaration in sorted position, and splices the re-rendered block back
//! into the document. This is line-oriented pattern matching, not parsing:
//! the grammar is three statement shapes, which is the only reason regexes
//! are adequate here.

pub mod declaration;
pub mod names;
pub mod partition;
pub mod render;
pub mod section;

/// Statement style used by a declaration, and by the section as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// `const name = require('path');`
    Require,
    /// `import name from 'path';`
    Import,
}

/// Classification of a dependency string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyKind {
    /// Names an installed package ("lodash", "@scope/pkg").
    NodeModule,
    /// A path relative to the current file ("./helpers").
    Relative,
}

impl DependencyKind {
    /// Purely lexical: a leading `.` means relative, anything else is a
    /// node module.
    #[must_use]
    pub fn of(dep_string: &str) -> Self {
        if dep_string.starts_with('.') {
            Self::Relative
        } else {
            Self::NodeModule
        }
    }
}

/// One statement binding a variable to a loaded dependency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Identifier the dependency is bound to.
    pub variable: String,
    /// Module name or relative path inside the quotes.
    pub dep_string: String,
}

/// Insert a declaration before the first entry whose variable name
/// case-insensitively sorts after it, or append when none does.
///
/// Only the receiving group is touched, so a group that takes no insertion
/// re-renders byte-identically.
pub fn insert_sorted(group: &mut Vec<Declaration>, declaration: Declaration) {
    let key = declaration.variable.to_lowercase();
    let index = group
        .iter()
        .position(|d| d.variable.to_lowercase() > key)
        .unwrap_or(group.len());
    group.insert(index, declaration);
}

#[cfg(test)]
#[path = "tests/imports.rs"]
mod tests;
