//! Core types for alfredmoji-core.
//!
//! This module defines the data structures shared across all pipeline
//! stages: the parsed [`EmojiRecord`], the [`Glyph`] it carries, the
//! [`SourceFormat`] discriminant and the emoji [`Qualification`] states.

use crate::codepoint;

/// The emoji itself, as it appeared in the source line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// The rendered glyph, copied verbatim from an `emoji-test.txt` annotation.
    Literal(String),
    /// Hexadecimal code points from `emoji-sequences.txt`, space separated
    /// for multi-code-point sequences (e.g. `1F1FA 1F1F8`).
    CodePoints(String),
}

impl Glyph {
    /// The character sequence this glyph denotes.
    ///
    /// Literal glyphs are returned as-is; code points go through
    /// [`codepoint::resolve`], which silently drops unparseable tokens.
    pub fn resolve(&self) -> String {
        match self {
            Glyph::Literal(s) => s.clone(),
            Glyph::CodePoints(cps) => codepoint::resolve(cps),
        }
    }

    /// The glyph text as it appeared in the source file.
    pub fn raw(&self) -> &str {
        match self {
            Glyph::Literal(s) | Glyph::CodePoints(s) => s,
        }
    }
}

/// One parsed emoji entry.
///
/// Built transiently per source line by a line parser and handed straight to
/// the emitter; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRecord {
    pub glyph: Glyph,
    /// Human-readable label. Already filename-safe for `emoji-test.txt`
    /// records; raw (spaces intact) for `emoji-sequences.txt` records.
    pub description: String,
    /// Subgroup header in effect when the line was read. Always `None` for
    /// `emoji-sequences.txt` records.
    pub subgroup: Option<String>,
}

impl EmojiRecord {
    pub fn new(glyph: Glyph, description: impl Into<String>) -> Self {
        Self {
            glyph,
            description: description.into(),
            subgroup: None,
        }
    }

    pub fn with_subgroup(mut self, subgroup: Option<String>) -> Self {
        self.subgroup = subgroup;
        self
    }
}

/// Which upstream data file a pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceFormat {
    /// `emoji-test.txt`: one glyph per line with a qualification status.
    #[default]
    Test,
    /// `emoji-sequences.txt`: code points or `A..B` ranges, three `;` fields.
    Sequences,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Test => write!(f, "test"),
            SourceFormat::Sequences => write!(f, "sequences"),
        }
    }
}

/// Emoji qualification status, as written in the second field of an
/// `emoji-test.txt` data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualification {
    FullyQualified,
    MinimallyQualified,
    Unqualified,
    Component,
}

static QUALIFICATIONS: phf::Map<&'static str, Qualification> = phf::phf_map! {
    "fully-qualified" => Qualification::FullyQualified,
    "minimally-qualified" => Qualification::MinimallyQualified,
    "unqualified" => Qualification::Unqualified,
    "component" => Qualification::Component,
};

impl Qualification {
    /// Parse a status field. Surrounding whitespace is ignored; unknown
    /// statuses return `None`.
    pub fn parse(field: &str) -> Option<Self> {
        QUALIFICATIONS.get(field.trim()).copied()
    }
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Qualification::FullyQualified => write!(f, "fully-qualified"),
            Qualification::MinimallyQualified => write!(f, "minimally-qualified"),
            Qualification::Unqualified => write!(f, "unqualified"),
            Qualification::Component => write!(f, "component"),
        }
    }
}
