//! Line parser for `emoji-sequences.txt`.
//!
//! ```text
//! 1F600         ; Basic_Emoji  ; grinning face           # E1.0   [1] (😀)
//! 231A..231B    ; Basic_Emoji  ; watch..hourglass done   # E0.6   [2] (⌚..⌛)
//! ```
//!
//! Each line stands alone; there is no header context. A `..` range is kept
//! as its two literal endpoints and paired positionally with the endpoints
//! of the description range. Intermediate code points of a range are NOT
//! enumerated.

use crate::types::{EmojiRecord, Glyph};

const FIELD_SEPARATOR: char = ';';
const COMMENT: char = '#';
const RANGE: &str = "..";

/// Parse one line into zero or more records.
///
/// Returns an empty vector for comments, blank lines and anything with fewer
/// than three `;` fields. When the code-point side has more endpoints than
/// the description side, the surplus is dropped.
pub fn parse_line(line: &str) -> Vec<EmojiRecord> {
    if line.trim_start().starts_with(COMMENT) {
        return Vec::new();
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return Vec::new();
    }

    let code_points = fields[0].trim();
    if code_points.is_empty() {
        return Vec::new();
    }
    let description = fields[2].split(COMMENT).next().unwrap_or_default().trim();

    let descriptions: Vec<&str> = description.split(RANGE).collect();
    code_points
        .split(RANGE)
        .zip(descriptions)
        .map(|(cp, desc)| EmojiRecord::new(Glyph::CodePoints(cp.trim().to_string()), desc.trim()))
        .collect()
}

/// Parse every line, concatenating the records in input order.
pub fn parse_lines<I, S>(lines: I) -> impl Iterator<Item = EmojiRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().flat_map(|line| parse_line(line.as_ref()))
}
