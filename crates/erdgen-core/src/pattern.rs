//! Shell-style glob matching for model names.
//!
//! `*` matches any run of characters, `?` a single character and `[...]` a
//! character class. A backslash makes the next character literal. Names are
//! not paths: `::` and `/` are ordinary characters.

use std::fmt;

use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled name pattern.
///
/// Text that is not a valid glob (an unclosed `[` for example) is kept as a
/// literal and only matches the identical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    source: String,
    compiled: Option<Pattern>,
}

impl NamePattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let compiled = match Pattern::new(&collapse_stars(&unescape(&source))) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::debug!(
                    event = "pattern_literal_fallback",
                    pattern = %source,
                    reason = %err.msg
                );
                None
            }
        };
        Self { source, compiled }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.compiled {
            Some(pattern) => pattern.matches_with(name, MATCH_OPTIONS),
            None => self.source == name,
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for NamePattern {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NamePattern {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Match `name` against a glob `pattern`.
pub fn matches(pattern: &str, name: &str) -> bool {
    NamePattern::new(pattern).matches(name)
}

// `glob` has no backslash escape; a quoted metacharacter becomes a one-char class.
fn unescape(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(next @ ('?' | '*' | '[' | ']')) => {
                out.push('[');
                out.push(next);
                out.push(']');
            }
            Some(next) => out.push(next),
            None => out.push('\\'),
        }
    }
    out
}

// `glob` reserves `**` for recursive path components; for names it is just `*`.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut previous_star = false;
    for ch in pattern.chars() {
        if ch == '*' && previous_star {
            continue;
        }
        previous_star = ch == '*';
        out.push(ch);
    }
    out
}
