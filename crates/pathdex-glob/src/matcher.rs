//! Compiled wildcard predicates.

use regex::{Regex, RegexBuilder};

use crate::names::normalize_search_pattern;

/// Compiled program size allowed per pattern (the regex crate's default).
const SIZE_LIMIT: usize = 10 * (1 << 20);

/// A search expression compiled into a name predicate.
///
/// Compilation never fails. Any string is accepted; a pattern the regex
/// engine refuses (for example one past its size limit) compiles to a
/// matcher that rejects every name.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    kind: MatchKind,
}

#[derive(Debug, Clone)]
enum MatchKind {
    /// Exactly `*`.
    Any,
    /// No wildcards: case-insensitive equality.
    Exact(String),
    /// Anchored, case-insensitive regex.
    Pattern(Regex),
    /// The engine rejected the compiled pattern.
    Never,
}

impl WildcardMatcher {
    /// Compile a search expression.
    ///
    /// DOS spellings (`<`, `>`) are normalized first, so `<.txt` and
    /// `*.txt` compile to the same matcher.
    pub fn new(pattern: &str) -> Self {
        Self::with_size_limit(pattern, SIZE_LIMIT)
    }

    fn with_size_limit(pattern: &str, size_limit: usize) -> Self {
        let pattern = normalize_search_pattern(pattern);

        let kind = if pattern == "*" {
            MatchKind::Any
        } else if !pattern.contains(['*', '?']) {
            MatchKind::Exact(pattern.into_owned())
        } else {
            match compile_pattern(&pattern, size_limit) {
                Ok(regex) => MatchKind::Pattern(regex),
                Err(e) => {
                    tracing::warn!("wildcard {:?} matches nothing: {}", pattern, e);
                    MatchKind::Never
                }
            }
        };

        Self { kind }
    }

    /// A matcher that accepts every name, the same as `new("*")`.
    pub fn any() -> Self {
        Self {
            kind: MatchKind::Any,
        }
    }

    /// Returns true if this matcher accepts every name without comparing.
    pub fn matches_everything(&self) -> bool {
        matches!(self.kind, MatchKind::Any)
    }

    /// Test a single entry name.
    pub fn matches(&self, name: &str) -> bool {
        match &self.kind {
            MatchKind::Any => true,
            MatchKind::Exact(expected) => eq_ignore_case(expected, name),
            MatchKind::Pattern(regex) => regex.is_match(name),
            MatchKind::Never => false,
        }
    }
}

impl Default for WildcardMatcher {
    fn default() -> Self {
        Self::any()
    }
}

/// Escape everything, then turn the escaped wildcards back into regex.
///
/// `regex::escape` writes a literal backslash as `\\`, so scanning for `\*`
/// and `\?` left to right only ever hits an escaped wildcard.
fn compile_pattern(pattern: &str, size_limit: usize) -> Result<Regex, regex::Error> {
    let body = regex::escape(pattern)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");

    RegexBuilder::new(&format!("^{}$", body))
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .size_limit(size_limit)
        .build()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
