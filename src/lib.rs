//! alfredmoji — Unicode emoji data to Alfred snippet pack.
//!
//! Fetches `emoji-test.txt` (or `emoji-sequences.txt`) from unicode.org,
//! parses every emoji line, writes one Alfred snippet JSON file per emoji
//! and bundles them with a manifest and icon into a `.alfredsnippets`
//! archive. This crate holds the command-line surface; the work happens in
//! the member crates, re-exported here so integration tests can reach them
//! through one path.
//!
//! # Architecture
//!
//! ```text
//! Fetcher ──► Line Parser ──► Record Emitter ──► Archive Builder
//!  (feeds)      (core)           (pack)             (pack)
//! ```
//!
//! Everything runs on the main thread, one line at a time.

pub mod cli;

pub use alfredmoji_core::config::Config;
pub use alfredmoji_core::{EmojiRecord, Glyph, SourceFormat};
pub use alfredmoji_pack::{run, Mode, PackOptions, RunReport};
