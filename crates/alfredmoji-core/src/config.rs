//! Configuration types for alfredmoji.
//!
//! [`Config::load`] reads `~/.config/alfredmoji/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//! Command-line flags are layered on top by the binary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::SourceFormat;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
unicode_version   = "15.1"
sequences_version = "15.1"
test_url          = "https://unicode.org/Public/emoji/{version}/emoji-test.txt"
sequences_url     = "https://unicode.org/Public/emoji/{version}/emoji-sequences.txt"

[paths]
cache_dir = "."
build_dir = "build"
dist_dir  = "dist"

[pack]
name_prefix    = "alfredmoji"
keyword_prefix = ":"
keyword_suffix = ":"
keep_build     = false
"#;

/// Placeholder substituted with the data revision in URL templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub pack: PackConfig,
}

/// `[source]` section: where the Unicode data files come from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_unicode_version")]
    pub unicode_version: String,
    /// `emoji-sequences.txt` is pinned separately; the `--unicode-version`
    /// flag only moves `emoji-test.txt`.
    #[serde(default = "default_sequences_version")]
    pub sequences_version: String,
    #[serde(default = "default_test_url")]
    pub test_url: String,
    #[serde(default = "default_sequences_url")]
    pub sequences_url: String,
}

fn default_unicode_version() -> String { "15.1".to_string() }
fn default_sequences_version() -> String { "15.1".to_string() }
fn default_test_url() -> String {
    "https://unicode.org/Public/emoji/{version}/emoji-test.txt".to_string()
}
fn default_sequences_url() -> String {
    "https://unicode.org/Public/emoji/{version}/emoji-sequences.txt".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            unicode_version: default_unicode_version(),
            sequences_version: default_sequences_version(),
            test_url: default_test_url(),
            sequences_url: default_sequences_url(),
        }
    }
}

impl SourceConfig {
    /// Data revision used for `format`.
    pub fn version_for(&self, format: SourceFormat) -> &str {
        match format {
            SourceFormat::Test => &self.unicode_version,
            SourceFormat::Sequences => &self.sequences_version,
        }
    }

    /// Fully expanded download URL for `format`.
    pub fn url_for(&self, format: SourceFormat) -> String {
        let template = match format {
            SourceFormat::Test => &self.test_url,
            SourceFormat::Sequences => &self.sequences_url,
        };
        template.replace(VERSION_PLACEHOLDER, self.version_for(format))
    }
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Downloaded data files are cached under `<cache_dir>/<version>/`.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Per-snippet JSON files, the manifest and the icon are staged here.
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
    /// Finished `.alfredsnippets` archives land here.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    /// Replace the built-in pack icon with this PNG.
    #[serde(default)]
    pub icon: Option<PathBuf>,
}

fn default_cache_dir() -> PathBuf { PathBuf::from(".") }
fn default_build_dir() -> PathBuf { PathBuf::from("build") }
fn default_dist_dir() -> PathBuf { PathBuf::from("dist") }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            build_dir: default_build_dir(),
            dist_dir: default_dist_dir(),
            icon: None,
        }
    }
}

/// `[pack]` section: snippet pack naming and keyword convention.
#[derive(Debug, Clone, Deserialize)]
pub struct PackConfig {
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
    #[serde(default = "default_keyword_affix")]
    pub keyword_prefix: String,
    #[serde(default = "default_keyword_affix")]
    pub keyword_suffix: String,
    /// Keep the build directory after a successful archive.
    #[serde(default)]
    pub keep_build: bool,
}

fn default_name_prefix() -> String { "alfredmoji".to_string() }
fn default_keyword_affix() -> String { ":".to_string() }

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            name_prefix: default_name_prefix(),
            keyword_prefix: default_keyword_affix(),
            keyword_suffix: default_keyword_affix(),
            keep_build: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/alfredmoji/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file on top of the built-in defaults. The
    /// file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("alfredmoji")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
