//! Archive builder: zips the staged files into a flat `.alfredsnippets`
//! bundle.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ArchiveError;

/// Zip `files` into `dest`, each under its base name.
///
/// Contents are copied byte for byte. The archive is assembled at
/// `<dest>.part` and renamed into place only once every file went in; on any
/// failure the partial file is removed and `dest` is left untouched.
pub fn build_archive(dest: &Path, files: &[PathBuf]) -> Result<(), ArchiveError> {
    let partial = partial_path(dest);
    match write_zip(&partial, files) {
        Ok(()) => std::fs::rename(&partial, dest).map_err(|source| ArchiveError::Io {
            path: dest.to_path_buf(),
            source,
        }),
        Err(err) => {
            let _ = std::fs::remove_file(&partial);
            Err(err)
        }
    }
}

fn write_zip(target: &Path, files: &[PathBuf]) -> Result<(), ArchiveError> {
    let out = File::create(target).map_err(|source| ArchiveError::Io {
        path: target.to_path_buf(),
        source,
    })?;
    let mut zip = ZipWriter::new(BufWriter::new(out));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let io_err = |source| ArchiveError::Io {
            path: path.clone(),
            source,
        };
        let mut input = File::open(path).map_err(io_err)?;
        let name = entry_name(path).ok_or_else(|| {
            io_err(io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))
        })?;

        debug!("adding {name}");
        zip.start_file(name, options)?;
        io::copy(&mut input, &mut zip).map_err(io_err)?;
    }

    zip.finish()?
        .into_inner()
        .map_err(|err| ArchiveError::Io {
            path: target.to_path_buf(),
            source: err.into_error(),
        })?;
    Ok(())
}

fn entry_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
