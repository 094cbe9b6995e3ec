//! Domain-specific assertions for alfredmoji harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which record or archive entry broke.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert a record's glyph text, description and subgroup in one go.
///
/// ```rust
/// assert_record!(record, "😀", "grinning-face", Some("face-smiling"));
/// ```
#[macro_export]
macro_rules! assert_record {
    ($record:expr, $glyph:expr, $description:expr, $subgroup:expr) => {{
        let record: &alfredmoji::EmojiRecord = &$record;
        let expected: (&str, &str, Option<&str>) = ($glyph, $description, $subgroup);
        pretty_assertions::assert_eq!(
            (
                record.glyph.raw(),
                record.description.as_str(),
                record.subgroup.as_deref()
            ),
            expected,
            "record mismatch for {:?}",
            record
        );
    }};
}

/// Assert that a description is safe to use as a keyword and file name.
#[macro_export]
macro_rules! assert_keyword_safe {
    ($description:expr) => {{
        let description: &str = &$description;
        let bad: Vec<char> = description
            .chars()
            .filter(|c| {
                c.is_whitespace()
                    || matches!(c, ',' | ':' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}')
            })
            .collect();
        if !bad.is_empty() {
            panic!(
                "assert_keyword_safe! failed: {:?} contains {:?}",
                description, bad
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Archive helpers
// ---------------------------------------------------------------------------

/// Read every entry of a zip archive into `name → bytes`.
pub fn read_archive(path: &Path) -> BTreeMap<String, Vec<u8>> {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("cannot open archive {}: {e}", path.display()));
    let mut archive = zip::ZipArchive::new(file).expect("valid zip archive");
    let mut entries = BTreeMap::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).expect("archive entry");
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).expect("read archive entry");
        entries.insert(entry.name().to_string(), bytes);
    }
    entries
}

/// Snippet JSON files (`*.json`) in `dir`, by file name.
pub fn snippet_files(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return BTreeMap::new();
    };
    read_dir
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .map(|p| {
            let name = p.file_name().unwrap().to_string_lossy().into_owned();
            (name, std::fs::read(&p).unwrap())
        })
        .collect()
}
