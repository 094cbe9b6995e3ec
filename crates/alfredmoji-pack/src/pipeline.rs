//! The end-to-end run: fetch → parse → preview or emit → archive.
//!
//! Everything the run needs arrives in a [`PackOptions`] value; nothing is
//! read from process-global state, so tests can drive any configuration.
//! The run is strictly sequential.

use std::io::Write;
use std::path::{Path, PathBuf};

use alfredmoji_core::config::Config;
use alfredmoji_core::{sequences, test_format, EmojiRecord, Glyph, SourceFormat};
use alfredmoji_feeds::LineSource;
use anyhow::Context;
use tracing::{debug, error, info, warn};

use crate::archive::build_archive;
use crate::manifest;
use crate::snippet::{generate_uid, write_snippet, Snippet};

/// What to do with the parsed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print each record to the output writer; write nothing to disk.
    /// `code_points` shows raw hex instead of the glyph for
    /// `emoji-sequences.txt` records.
    Preview { code_points: bool },
    /// Write snippet files and build the archive.
    Package,
}

/// Explicit configuration for one run.
#[derive(Debug, Clone)]
pub struct PackOptions {
    pub format: SourceFormat,
    pub mode: Mode,
    /// Data revision, used in the archive name.
    pub version: String,
    pub build_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub name_prefix: String,
    pub keyword_prefix: String,
    pub keyword_suffix: String,
    pub icon: Option<PathBuf>,
    pub keep_build: bool,
}

impl PackOptions {
    /// Options for `format` taken from `config`, in package mode.
    pub fn from_config(config: &Config, format: SourceFormat) -> Self {
        Self {
            format,
            mode: Mode::Package,
            version: config.source.version_for(format).to_string(),
            build_dir: config.paths.build_dir.clone(),
            dist_dir: config.paths.dist_dir.clone(),
            name_prefix: config.pack.name_prefix.clone(),
            keyword_prefix: config.pack.keyword_prefix.clone(),
            keyword_suffix: config.pack.keyword_suffix.clone(),
            icon: config.paths.icon.clone(),
            keep_build: config.pack.keep_build,
        }
    }

    /// `alfredmoji-15.1.alfredsnippets`, or
    /// `alfredmoji-sequences-15.1.alfredsnippets` for the sequences file.
    pub fn archive_name(&self) -> String {
        match self.format {
            SourceFormat::Test => format!("{}-{}.alfredsnippets", self.name_prefix, self.version),
            SourceFormat::Sequences => {
                format!("{}-sequences-{}.alfredsnippets", self.name_prefix, self.version)
            }
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.dist_dir.join(self.archive_name())
    }
}

/// Counts from a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Records produced by the parser.
    pub parsed: usize,
    /// Snippet files written.
    pub emitted: usize,
    /// Records whose snippet file could not be written.
    pub failed: usize,
    /// The archive, if one was built.
    pub archive: Option<PathBuf>,
}

/// Run the pipeline against `source`.
///
/// Only a fetch failure (or failing to create the output directories) is an
/// error. Per-record write failures are logged and counted, and an archive
/// failure is logged and leaves the build directory in place.
pub fn run<S, W>(source: &S, opts: &PackOptions, out: &mut W) -> anyhow::Result<RunReport>
where
    S: LineSource + ?Sized,
    W: Write,
{
    let lines = source
        .fetch_lines()
        .with_context(|| format!("Error fetching emoji data from {}", source.describe()))?;
    info!("read {} lines from {}", lines.len(), source.describe());

    let records: Box<dyn Iterator<Item = EmojiRecord> + '_> = match opts.format {
        SourceFormat::Test => Box::new(test_format::parse_lines(&lines)),
        SourceFormat::Sequences => Box::new(sequences::parse_lines(&lines)),
    };

    match opts.mode {
        Mode::Preview { code_points } => preview(records, opts.format, code_points, out),
        Mode::Package => package(records, opts),
    }
}

fn preview(
    records: impl Iterator<Item = EmojiRecord>,
    format: SourceFormat,
    code_points: bool,
    out: &mut impl Write,
) -> anyhow::Result<RunReport> {
    let mut report = RunReport::default();
    for record in records {
        report.parsed += 1;
        match (format, &record.glyph) {
            (SourceFormat::Sequences, Glyph::CodePoints(raw)) => {
                let shown = if code_points {
                    raw.clone()
                } else {
                    record.glyph.resolve()
                };
                writeln!(out, "Emoji: {shown}, Description: {}", record.description)?;
            }
            _ => writeln!(out, "{}: {}", record.glyph.resolve(), record.description)?,
        }
    }
    Ok(report)
}

fn package(
    records: impl Iterator<Item = EmojiRecord>,
    opts: &PackOptions,
) -> anyhow::Result<RunReport> {
    for dir in [&opts.build_dir, &opts.dist_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }

    let mut report = RunReport::default();
    let mut files = Vec::new();

    for record in records {
        report.parsed += 1;
        let snippet = Snippet::from_record(&record, record.glyph.resolve(), generate_uid());
        match write_snippet(&opts.build_dir, &snippet) {
            Ok(path) => {
                debug!("wrote {}", path.display());
                report.emitted += 1;
                files.push(path);
            }
            Err(err) => {
                error!("Error generating JSON for {}: {err}", record.description);
                report.failed += 1;
            }
        }
    }
    info!(
        "wrote {} snippets ({} failed) to {}",
        report.emitted,
        report.failed,
        opts.build_dir.display()
    );

    let archive = opts.archive_path();
    match stage_assets(opts).and_then(|assets| {
        files.extend(assets);
        build_archive(&archive, &files).map_err(anyhow::Error::from)
    }) {
        Ok(()) => {
            info!("{} created successfully", archive.display());
            if !opts.keep_build {
                clean_build(&opts.build_dir, &files);
            }
            report.archive = Some(archive);
        }
        Err(err) => error!("Error creating {}: {err:#}", archive.display()),
    }

    Ok(report)
}

fn stage_assets(opts: &PackOptions) -> anyhow::Result<Vec<PathBuf>> {
    let plist = manifest::write_info_plist(&opts.build_dir, &opts.keyword_prefix, &opts.keyword_suffix)
        .context("Error generating info.plist")?;
    let icon = manifest::write_icon(&opts.build_dir, opts.icon.as_deref())
        .context("Error staging icon.png")?;
    Ok(vec![plist, icon])
}

/// Remove the files this run staged, then the build directory if that left
/// it empty. Anything else in the directory is not ours to delete.
fn clean_build(build_dir: &Path, staged: &[PathBuf]) {
    for path in staged {
        if let Err(err) = std::fs::remove_file(path) {
            warn!("could not remove {}: {err}", path.display());
        }
    }
    if std::fs::remove_dir(build_dir).is_err() {
        debug!("{} not empty, leaving it", build_dir.display());
    }
}
