//! Fetch-or-reuse wrapper around another source.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{FetchError, FileSource, LineSource};

/// Serves lines from a cache file when present; otherwise fetches from the
/// inner source and writes the cache for next time.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    cache: PathBuf,
}

impl<S: LineSource> CachedSource<S> {
    pub fn new(inner: S, cache: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            cache: cache.into(),
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn store(&self, lines: &[String]) -> std::io::Result<()> {
        if let Some(parent) = self.cache.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.cache, lines.join("\n"))
    }
}

impl<S: LineSource> LineSource for CachedSource<S> {
    fn describe(&self) -> String {
        format!("{} (cache {})", self.inner.describe(), self.cache.display())
    }

    fn fetch_lines(&self) -> Result<Vec<String>, FetchError> {
        if self.cache.is_file() {
            info!("Using existing file: {}", self.cache.display());
            return FileSource::new(&self.cache).fetch_lines();
        }

        let lines = self.inner.fetch_lines()?;
        // Cache write failure is non-fatal.
        if let Err(err) = self.store(&lines) {
            warn!("could not cache {}: {err}", self.cache.display());
        }
        Ok(lines)
    }
}
