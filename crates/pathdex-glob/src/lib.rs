//! pathdex-glob: wildcard matching for directory listings.
//!
//! Search expressions use the Windows `FindFirstFile` conventions:
//!
//! - `*` matches any run of characters, including none
//! - `?` matches exactly one character
//! - `<` and `>` are the DOS spellings of `*` and `?`
//!
//! Matching is always case-insensitive. It applies to the name of a single
//! directory entry, never to a whole path.

mod matcher;
mod names;

pub use matcher::WildcardMatcher;
pub use names::{is_bad_name, normalize_search_pattern};
