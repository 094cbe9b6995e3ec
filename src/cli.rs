//! Command-line interface.
//!
//! Flags override the config file, which overrides the built-in defaults.
//! [`Cli::options`] folds all of that into the explicit [`PackOptions`] the
//! pipeline runs on.

use std::path::PathBuf;

use alfredmoji_core::config::Config;
use alfredmoji_core::SourceFormat;
use alfredmoji_feeds::{remote_source, FileSource, LineSource};
use alfredmoji_pack::{Mode, PackOptions};
use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "alfredmoji",
    about = "Generate an Alfred snippet pack from the Unicode emoji data files"
)]
pub struct Cli {
    /// Which Unicode data file to convert.
    #[arg(long, value_enum, default_value_t = FormatArg::Test)]
    pub format: FormatArg,

    /// Display emojis instead of generating the snippet pack.
    #[arg(long)]
    pub emojis: bool,

    /// With --emojis on the sequences file, print code points instead of glyphs.
    #[arg(long, requires = "emojis")]
    pub code_points: bool,

    /// Unicode version of emoji-test.txt to use (default: 15.1).
    #[arg(long, value_name = "VERSION")]
    pub unicode_version: Option<String>,

    /// Read this local file instead of downloading or using the cache.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Config file to use instead of ~/.config/alfredmoji/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for cached downloads.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Staging directory for snippet files.
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Output directory for the .alfredsnippets archive.
    #[arg(long, value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,

    /// Keep the staged snippet files after the archive is built.
    #[arg(long)]
    pub keep_build: bool,

    /// Write debug logs to /tmp/alfredmoji-debug.log (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// emoji-test.txt
    Test,
    /// emoji-sequences.txt
    Sequences,
}

impl From<FormatArg> for SourceFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Test => SourceFormat::Test,
            FormatArg::Sequences => SourceFormat::Sequences,
        }
    }
}

impl Cli {
    /// The `--config` file if given, else the user config (falling back to
    /// built-in defaults if that cannot be read).
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Ok(Config::load().unwrap_or_else(|err| {
                tracing::warn!("using default config: {err:#}");
                Config::defaults()
            })),
        }
    }

    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(version) = &self.unicode_version {
            config.source.unicode_version = version.clone();
        }
        if let Some(dir) = &self.cache_dir {
            config.paths.cache_dir = dir.clone();
        }
        if let Some(dir) = &self.build_dir {
            config.paths.build_dir = dir.clone();
        }
        if let Some(dir) = &self.dist_dir {
            config.paths.dist_dir = dir.clone();
        }
        if self.keep_build {
            config.pack.keep_build = true;
        }
    }

    pub fn source_format(&self) -> SourceFormat {
        self.format.into()
    }

    pub fn mode(&self) -> Mode {
        if self.emojis {
            Mode::Preview {
                code_points: self.code_points,
            }
        } else {
            Mode::Package
        }
    }

    /// Pipeline options for an already-overridden `config`.
    pub fn options(&self, config: &Config) -> PackOptions {
        let mut opts = PackOptions::from_config(config, self.source_format());
        opts.mode = self.mode();
        opts
    }

    /// `--input` if given, else the cached unicode.org download.
    pub fn source(&self, config: &Config) -> Box<dyn LineSource> {
        match &self.input {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(remote_source(config, self.source_format())),
        }
    }
}
