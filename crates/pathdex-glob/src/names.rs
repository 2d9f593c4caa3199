//! Name-level helpers shared by the matcher and the namespace.

use std::borrow::Cow;

/// Characters that make a name a search expression rather than a file name.
const WILDCARD_CHARS: [char; 4] = ['*', '?', '<', '>'];

/// Rewrite the DOS wildcard spellings to their canonical forms.
///
/// `>` becomes `?` and `<` becomes `*`. Borrows when nothing changes.
pub fn normalize_search_pattern(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains(['<', '>']) {
        return Cow::Borrowed(pattern);
    }

    Cow::Owned(
        pattern
            .chars()
            .map(|c| match c {
                '>' => '?',
                '<' => '*',
                other => other,
            })
            .collect(),
    )
}

/// Returns true if `name` contains any wildcard character.
///
/// Such a name can never refer to a concrete entry.
pub fn is_bad_name(name: &str) -> bool {
    name.contains(WILDCARD_CHARS)
}
