//! Variable-name derivation for typed dependency strings.
//!
//! The default name is the camel-cased last path segment of the dependency
//! string. A small set of packages override that: canonical aliases
//! (`lodash` is always `_`), constructor packages that take a capitalised
//! name, and packages that get wrapped in `pify(...)` at render time.

use crate::case::{camel_case, pascal_case};

/// Immutable naming tables handed to the rewriter.
pub struct NameRules {
    aliases: &'static [(&'static str, &'static str)],
    constructors: &'static [&'static str],
    promisified: &'static [&'static str],
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            aliases: &[
                ("koa", "Koa"),
                ("koa-router", "KoaRouter"),
                ("lodash", "_"),
                ("vue", "Vue"),
            ],
            constructors: &["koa", "koa-router", "memory-fs", "vue", "vue-router"],
            promisified: &["fs"],
        }
    }
}

impl NameRules {
    /// Whether this dependency gets wrapped in `pify(...)`.
    #[must_use]
    pub fn is_promisified(&self, dep_string: &str) -> bool {
        self.promisified.contains(&dep_string)
    }

    /// Derive the default variable name for a dependency string.
    #[must_use]
    pub fn variable_name(&self, dep_string: &str) -> String {
        if let Some((_, alias)) = self.aliases.iter().find(|(key, _)| *key == dep_string) {
            return (*alias).to_string();
        }
        if let Some(prefix) = dep_string.strip_suffix("webpack-plugin") {
            return pascal_case(&format!("{prefix}plugin"));
        }
        if self.constructors.contains(&dep_string) {
            return pascal_case(dep_string);
        }
        let basename = dep_string.rsplit('/').next().unwrap_or(dep_string);
        camel_case(basename)
    }
}

#[cfg(test)]
#[path = "../tests/names.rs"]
mod tests;
