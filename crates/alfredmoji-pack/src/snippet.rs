//! Record emitter: one Alfred snippet JSON file per emoji.
//!
//! The on-disk shape is fixed by Alfred's snippet import:
//!
//! ```json
//! { "alfredsnippet": { "snippet": "😀", "uid": "…", "name": "…", "keyword": "…" } }
//! ```

use std::path::{Path, PathBuf};

use alfredmoji_core::normalize::normalize_description;
use alfredmoji_core::EmojiRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EmitError;

/// Top-level wrapper Alfred expects around every snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetFile {
    pub alfredsnippet: Snippet,
}

/// A single snippet definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Text inserted when the keyword fires: the emoji itself.
    pub snippet: String,
    pub uid: String,
    /// Display name in Alfred's snippet list.
    pub name: String,
    /// Trigger text, wrapped in the pack's prefix/suffix by Alfred.
    pub keyword: String,
}

impl Snippet {
    /// Project a record into a snippet.
    ///
    /// `name` is `"(<subgroup>) <description>"`, or the bare description when
    /// the record has no subgroup. `keyword` is the normalised description,
    /// which is what also goes into the file name.
    pub fn from_record(record: &EmojiRecord, glyph: String, uid: String) -> Self {
        let name = match &record.subgroup {
            Some(subgroup) => format!("({subgroup}) {}", record.description),
            None => record.description.clone(),
        };
        Self {
            snippet: glyph,
            uid,
            name,
            keyword: normalize_description(&record.description),
        }
    }

    /// `"<keyword> [<uid>].json"`
    pub fn file_name(&self) -> String {
        format!("{} [{}].json", self.keyword, self.uid)
    }
}

/// Fresh uppercase UUID v4. Collisions are not checked for.
pub fn generate_uid() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}

/// Serialize `snippet` into `dir`, returning the path written.
///
/// An existing file with the same name is overwritten. The keyword is used
/// as-is in the file name, so it must already be filesystem-safe.
pub fn write_snippet(dir: &Path, snippet: &Snippet) -> Result<PathBuf, EmitError> {
    let file = SnippetFile {
        alfredsnippet: snippet.clone(),
    };
    let json = serde_json::to_vec(&file).map_err(|source| EmitError::Serialize {
        name: snippet.name.clone(),
        source,
    })?;

    let path = dir.join(snippet.file_name());
    std::fs::write(&path, json).map_err(|source| EmitError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
