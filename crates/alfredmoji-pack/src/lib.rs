//! alfredmoji-pack — turns parsed emoji records into an Alfred snippet pack.
//!
//! [`pipeline::run`] is the entry point: it pulls lines from a
//! [`LineSource`](alfredmoji_feeds::LineSource), parses them, writes one
//! snippet JSON file per record into the build directory, adds the manifest
//! and icon, and zips the lot into `<dist>/<name>.alfredsnippets`.

pub mod archive;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod snippet;

pub use error::{ArchiveError, EmitError};
pub use pipeline::{run, Mode, PackOptions, RunReport};
pub use snippet::{Snippet, SnippetFile};
