//! Code-point resolver: hexadecimal code-point strings to characters.

/// Convert a whitespace-separated list of hexadecimal code points into the
/// character sequence they denote.
///
/// A token that is not a base-16 integer, or does not name a Unicode scalar
/// value, is skipped and the output is simply one character shorter.
///
/// ```
/// use alfredmoji_core::codepoint::resolve;
///
/// assert_eq!(resolve("1F600"), "😀");
/// assert_eq!(resolve("1F1FA 1F1F8"), "🇺🇸");
/// assert_eq!(resolve("ZZZZ"), "");
/// ```
pub fn resolve(code_points: &str) -> String {
    code_points
        .split_whitespace()
        .filter_map(|token| u32::from_str_radix(token, 16).ok())
        .filter_map(char::from_u32)
        .collect()
}
