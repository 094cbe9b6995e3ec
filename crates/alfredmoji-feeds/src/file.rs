//! Local file source.

use std::path::PathBuf;

use crate::{split_lines, FetchError, LineSource};

/// Reads lines from a file already on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_lines(&self) -> Result<Vec<String>, FetchError> {
        let body = std::fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(split_lines(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji-test.txt");
        std::fs::write(&path, "# subgroup: face-smiling\r\n1F600 ; fully-qualified # 😀 E1.0 grinning face\n").unwrap();

        let lines = FileSource::new(&path).fetch_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "# subgroup: face-smiling");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.txt")).fetch_lines().unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }
}
