//! Locating and synthesising the banner-delimited import section.
//!
//! The section starts after the `// Imports //` banner (header line, border
//! line, blank line) and runs to the blank line before the next banner's
//! leading `//`. Absence is a valid state; a header without a closing
//! banner is a format error, never a guessing opportunity.

use crate::error::CommandError;
use regex::Regex;
use std::sync::LazyLock;

/// Banner emitted when a file gains its first import section.
pub const IMPORTS_HEADER: &str = "//---------//\n// Imports //\n//---------//\n\n";

static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(\n// Imports //\n[^\n]*\n\n)(.*?)\n\n//\n//-+//\n")
        .expect("section pattern compiles")
});

/// A located import section: byte offsets into the document plus inner text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSection {
    /// Byte offset where the inner text begins.
    pub start: usize,
    /// Byte offset just past the inner text.
    pub end: usize,
    /// The region between the opening banner and the closing banner.
    pub text: String,
}

/// Find the first banner-delimited import section.
///
/// Returns `Ok(None)` when no `// Imports //` banner exists at all.
///
/// # Errors
///
/// [`CommandError::UnterminatedSection`] when the header is present but no
/// closing banner follows it.
pub fn locate(text: &str) -> Result<Option<ImportSection>, CommandError> {
    if let Some(captures) = SECTION.captures(text) {
        if let (Some(whole), Some(header), Some(inner)) =
            (captures.get(0), captures.get(1), captures.get(2))
        {
            let start = whole.start() + header.len();
            return Ok(Some(ImportSection {
                start,
                end: start + inner.len(),
                text: inner.as_str().to_string(),
            }));
        }
    }
    if text.contains("\n// Imports //\n") {
        return Err(CommandError::UnterminatedSection);
    }
    Ok(None)
}

/// Build the document produced when no import section exists yet.
///
/// The new section lands after a leading directive line (`'use strict'` and
/// friends) and its following blank line when present, otherwise at the
/// very top, with a blank line separating it from existing content.
#[must_use]
pub fn synthesize(text: &str, body: &str) -> String {
    let section = format!("{IMPORTS_HEADER}{body}\n\n");
    if text.starts_with("'use") {
        if let Some(index) = text.find("\n\n") {
            let after_blank = index + 2;
            return format!(
                "{}{}{}",
                &text[..after_blank],
                section,
                &text[after_blank..]
            );
        }
    }
    format!("{section}{text}")
}
