//! Rendering dependency groups back into statement text.
//!
//! Grouped `require` statements share one `const`: the first line opens it,
//! middle lines are indented and comma-terminated, the last line carries the
//! semicolon. `import` statements are self-terminated one per line. The
//! output must splice back into the document without reformatting anything
//! the edit didn't touch.

use crate::case::upper_first;
use crate::imports::names::NameRules;
use crate::imports::partition::SectionParts;
use crate::imports::{Declaration, Syntax};

/// Position of a declaration within a grouped require statement.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Variant {
    Only,
    First,
    Middle,
    Last,
}

fn body(declaration: &Declaration, rules: &NameRules, promisify: bool) -> String {
    if promisify && rules.is_promisified(&declaration.dep_string) {
        format!(
            "p{} = pify(require('{}'))",
            upper_first(&declaration.variable),
            declaration.dep_string
        )
    } else {
        format!(
            "{} = require('{}')",
            declaration.variable, declaration.dep_string
        )
    }
}

fn require_line(
    declaration: &Declaration,
    rules: &NameRules,
    promisify: bool,
    variant: Variant,
) -> String {
    let body = body(declaration, rules, promisify);
    match variant {
        Variant::Only => format!("const {body};"),
        Variant::First => format!("const {body},"),
        Variant::Middle => format!("  {body},"),
        Variant::Last => format!("  {body};"),
    }
}

fn import_line(declaration: &Declaration) -> String {
    format!(
        "import {} from '{}';",
        declaration.variable, declaration.dep_string
    )
}

/// Render one dependency group as statement text ("" for an empty group).
#[must_use]
pub fn render_group(
    syntax: Syntax,
    group: &[Declaration],
    rules: &NameRules,
    promisify: bool,
) -> String {
    match syntax {
        Syntax::Import => group
            .iter()
            .map(import_line)
            .collect::<Vec<_>>()
            .join("\n"),
        Syntax::Require => group
            .iter()
            .enumerate()
            .map(|(index, declaration)| {
                let variant = if index == 0 {
                    if group.len() == 1 {
                        Variant::Only
                    } else {
                        Variant::First
                    }
                } else if index == group.len() - 1 {
                    Variant::Last
                } else {
                    Variant::Middle
                };
                require_line(declaration, rules, promisify, variant)
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a full section body: optional pify hoist, nodeModule block,
/// relative block, then rest lines, blank-line separated with empty blocks
/// omitted.
///
/// The pify hoist is applied before grouping: an existing `pify`
/// declaration is lifted out of the nodeModule group so it never renders
/// twice.
#[must_use]
pub fn render_section(
    syntax: Syntax,
    parts: &SectionParts,
    rules: &NameRules,
    promisify: bool,
) -> String {
    let mut node_module = parts.node_module.clone();
    let mut hoist = String::new();

    if syntax == Syntax::Require && promisify {
        let has_pify = node_module.iter().any(|d| d.dep_string == "pify");
        let needs_pify = node_module
            .iter()
            .any(|d| rules.is_promisified(&d.dep_string));
        if has_pify || needs_pify {
            let pify = Declaration {
                variable: "pify".to_string(),
                dep_string: "pify".to_string(),
            };
            hoist = require_line(&pify, rules, promisify, Variant::Only);
            node_module.retain(|d| d.dep_string != "pify");
        }
    }

    let blocks = [
        hoist,
        render_group(syntax, &node_module, rules, promisify),
        render_group(syntax, &parts.relative, rules, promisify),
        parts.rest.join("\n"),
    ];

    blocks
        .iter()
        .filter(|block| !block.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n\n")
}
