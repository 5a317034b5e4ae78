//! Identifier case conversion.
//!
//! Word splitting follows the conventions of lodash's `camelCase`/`kebabCase`:
//! words break on non-alphanumeric separators, on lower-to-upper transitions
//! ("fooBar"), and at the end of an acronym run ("XMLHttp" splits before
//! "Http"). These helpers back both the selection case-conversion commands
//! and variable-name derivation in the import rewriter.

/// Split a string into lowercase words.
#[must_use]
pub fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        let boundary = !current.is_empty() && {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            ((prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower)
        };
        if boundary {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Lowercase first word, capitalised words after: "run-with-args" -> "runWithArgs".
#[must_use]
pub fn camel_case(input: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&upper_first(word));
        }
    }
    out
}

/// Lowercase words joined by hyphens: "fooBarBaz" -> "foo-bar-baz".
#[must_use]
pub fn kebab_case(input: &str) -> String {
    words(input).join("-")
}

/// Camel case with the first letter capitalised: "memory-fs" -> "MemoryFs".
#[must_use]
pub fn pascal_case(input: &str) -> String {
    upper_first(&camel_case(input))
}

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lowercase the first character, leaving the rest untouched.
#[must_use]
pub fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[path = "tests/case.rs"]
mod tests;
