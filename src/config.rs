//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a pilcrow.toml, and if present we load
//! settings from there. This covers which file kinds the import rewriter
//! accepts and whether `fs` requires get promisified.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from pilcrow.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["js".to_string()])]
    /// File extensions eligible for import-section rewriting.
    pub import_extensions: Vec<String>,
    #[facet(default = true)]
    /// Wrap `fs` requires in `pify(...)` and hoist a pify import.
    pub promisify_fs: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from pilcrow.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("pilcrow.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
