//! Label normalisation.
//!
//! Descriptions end up as snippet keywords and as part of file names, so
//! they must be free of whitespace and of the punctuation Alfred and the
//! filesystem choke on.

/// Characters removed outright from descriptions: comma, colon and the four
/// typographic quotes (U+2018, U+2019, U+201C, U+201D).
const STRIPPED: &[char] = &[',', ':', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Collapse every whitespace run into a single `-` and drop [`STRIPPED`]
/// characters.
///
/// The result is idempotent: normalising twice gives the same string.
pub fn normalize_description(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}

/// Clean up a `# subgroup:` label: `&` becomes `and`, whitespace runs become
/// `-`.
pub fn normalize_subgroup(subgroup: &str) -> String {
    subgroup
        .replace('&', "and")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
