//! alfredmoji-feeds — emoji data sources for alfredmoji.
//!
//! Each source yields the raw lines of one Unicode data file. The pipeline
//! only sees the [`LineSource`] trait, so a cached download, a plain local
//! file and a test double are interchangeable.

pub mod cached;
pub mod file;
pub mod http;

pub use cached::CachedSource;
pub use file::FileSource;
pub use http::HttpSource;

use std::path::{Path, PathBuf};

use alfredmoji_core::config::Config;
use alfredmoji_core::SourceFormat;

/// Failure to obtain source lines. Fatal to a run: without lines there is
/// nothing to convert.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    #[error("failed to download {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },
    /// Local read failure.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can produce the lines of an emoji data file.
pub trait LineSource {
    /// Human-readable origin, for log lines.
    fn describe(&self) -> String;

    /// Fetch every line, in order, with line terminators removed.
    fn fetch_lines(&self) -> Result<Vec<String>, FetchError>;
}

impl<S: LineSource + ?Sized> LineSource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch_lines(&self) -> Result<Vec<String>, FetchError> {
        (**self).fetch_lines()
    }
}

/// Split a text body into lines, dropping `\n` / `\r\n` terminators.
pub fn split_lines(body: &str) -> Vec<String> {
    body.lines().map(str::to_string).collect()
}

/// Cache location for `url`: `<cache_dir>/<version>/<basename of url>`.
///
/// Keying on the version keeps two data revisions from clobbering each
/// other's cached copy.
pub fn cache_path(cache_dir: &Path, version: &str, url: &str) -> PathBuf {
    let name = url
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("emoji-data.txt");
    cache_dir.join(version).join(name)
}

/// The configured unicode.org download for `format`, cached under
/// `paths.cache_dir`.
pub fn remote_source(config: &Config, format: SourceFormat) -> CachedSource<HttpSource> {
    let url = config.source.url_for(format);
    let cache = cache_path(
        &config.paths.cache_dir,
        config.source.version_for(format),
        &url,
    );
    CachedSource::new(HttpSource::new(url), cache)
}
