//! alfredmoji-core — data model and line parsers for alfredmoji.
//!
//! This crate holds everything that is a pure function of the Unicode emoji
//! data text: the record types, the two line parsers, the description
//! normaliser and the code-point resolver. The only I/O it performs is
//! loading [`config::Config`].
//!
//! # Architecture
//!
//! ```text
//! Fetcher ──► Line Parser ──► (Code-Point Resolver) ──► Record Emitter ──► Archive Builder
//!  feeds        core              core                     pack                pack
//! ```
//!
//! Data flows strictly left to right; nothing reads back from a downstream
//! stage.

pub mod codepoint;
pub mod config;
pub mod normalize;
pub mod sequences;
pub mod test_format;
pub mod types;

pub use types::{EmojiRecord, Glyph, Qualification, SourceFormat};
