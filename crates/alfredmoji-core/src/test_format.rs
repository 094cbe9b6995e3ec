//! Line parser for `emoji-test.txt`.
//!
//! ```text
//! # subgroup: face-smiling
//! 1F600          ; fully-qualified     # 😀 E1.0 grinning face
//! 263A           ; unqualified         # ☺ E0.6 smiling face
//! ```
//!
//! Subgroup headers set context for every following data line, so parsing is
//! a fold: [`parse_line`] takes the current [`ParserState`] by value and hands
//! back the next one together with the record (if any) the line produced.
//! Only `fully-qualified` lines yield records; anything else is skipped
//! without error, since most of the file is comments and variants we do not
//! want.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::{normalize_description, normalize_subgroup};
use crate::types::{EmojiRecord, Glyph, Qualification};

const SUBGROUP_HEADER: &str = "# subgroup:";

/// Lines mentioning any of these are never emitted, wherever the marker
/// appears on the line.
const EXCLUDED_MARKERS: &[&str] = &["minimally-qualified", "unqualified", "component"];

/// `<glyph> E<major>.<minor> <description>`, with the glyph matched lazily so
/// the first version token wins.
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.+?) E\d+\.\d+ (.+)$").expect("annotation regex must compile")
});

/// State carried from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    /// Normalised label from the last `# subgroup:` header, if one was seen.
    pub current_subgroup: Option<String>,
}

/// Parse one line. Returns the state for the next line and at most one
/// record.
pub fn parse_line(state: ParserState, line: &str) -> (ParserState, Option<EmojiRecord>) {
    if let Some(label) = line.strip_prefix(SUBGROUP_HEADER) {
        let next = ParserState {
            current_subgroup: Some(normalize_subgroup(label)),
        };
        return (next, None);
    }

    let record = parse_data_line(line).map(|r| r.with_subgroup(state.current_subgroup.clone()));
    (state, record)
}

/// Fold [`parse_line`] over a sequence of lines, starting with no subgroup.
pub fn parse_lines<I, S>(lines: I) -> impl Iterator<Item = EmojiRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .scan(ParserState::default(), |state, line| {
            let (next, record) = parse_line(std::mem::take(state), line.as_ref());
            *state = next;
            Some(record)
        })
        .flatten()
}

/// Split a trailing annotation (`" 😀 E1.0 grinning face"`) into the glyph
/// and the normalised description. Any other shape returns `None`. A
/// description made only of stripped punctuation normalises to `""` and is
/// still returned.
pub fn extract_annotation(annotation: &str) -> Option<(String, String)> {
    let caps = ANNOTATION.captures(annotation)?;
    let glyph = caps.get(1)?.as_str().trim();
    let description = normalize_description(caps.get(2)?.as_str());
    if glyph.is_empty() {
        return None;
    }
    Some((glyph.to_string(), description))
}

fn parse_data_line(line: &str) -> Option<EmojiRecord> {
    if line.starts_with('#') || !line.contains(';') || !line.contains('#') {
        return None;
    }
    if EXCLUDED_MARKERS.iter().any(|marker| line.contains(marker)) {
        return None;
    }

    // code points ; status # annotation
    let (_, rest) = line.split_once(';')?;
    let (status, annotation) = rest.split_once('#')?;
    if Qualification::parse(status)? != Qualification::FullyQualified {
        return None;
    }

    let (glyph, description) = extract_annotation(annotation)?;
    Some(EmojiRecord::new(Glyph::Literal(glyph), description))
}
