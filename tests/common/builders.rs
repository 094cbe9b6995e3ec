//! Test builders — in-memory sources and pipeline options rooted in a
//! tempdir.
//!
//! These are designed for readability in tests, not for production use.
//! They panic on setup failures rather than returning `Result`.

use std::cell::Cell;
use std::path::{Path, PathBuf};

use alfredmoji::{Config, Mode, PackOptions, SourceFormat};
use alfredmoji_feeds::{FetchError, LineSource};

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// A [`LineSource`] serving fixed lines and counting how often it was asked.
pub struct StaticSource {
    lines: Vec<String>,
    calls: Cell<usize>,
}

impl StaticSource {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl LineSource for StaticSource {
    fn describe(&self) -> String {
        "static fixture".to_string()
    }

    fn fetch_lines(&self) -> Result<Vec<String>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.lines.clone())
    }
}

/// A [`LineSource`] that always fails, like an unreachable unicode.org.
pub struct FailingSource;

impl LineSource for FailingSource {
    fn describe(&self) -> String {
        "unreachable".to_string()
    }

    fn fetch_lines(&self) -> Result<Vec<String>, FetchError> {
        Err(FetchError::Io {
            path: PathBuf::from("unreachable/emoji-test.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no route to host"),
        })
    }
}

// ---------------------------------------------------------------------------
// OptionsBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`PackOptions`] with every directory under `root`.
///
/// ```rust
/// let opts = OptionsBuilder::new(tmp.path())
///     .format(SourceFormat::Sequences)
///     .keep_build(true)
///     .build();
/// ```
pub struct OptionsBuilder {
    opts: PackOptions,
}

impl OptionsBuilder {
    pub fn new(root: &Path) -> Self {
        let mut opts = PackOptions::from_config(&Config::defaults(), SourceFormat::Test);
        opts.build_dir = root.join("build");
        opts.dist_dir = root.join("dist");
        Self { opts }
    }

    pub fn format(mut self, format: SourceFormat) -> Self {
        self.opts.format = format;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.opts.mode = mode;
        self
    }

    pub fn keep_build(mut self, keep: bool) -> Self {
        self.opts.keep_build = keep;
        self
    }

    pub fn icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.opts.icon = Some(icon.into());
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.opts.version = version.to_string();
        self
    }

    pub fn build(self) -> PackOptions {
        self.opts
    }
}
