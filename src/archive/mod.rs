//! Tarball extraction and source-root discovery.
//!
//! Upstream releases ship as tar-family archives with a single top-level
//! directory (the "source root"). Extraction validates exactly that shape:
//! after unpacking, the target directory must hold one entry, which is
//! returned as the source root for the configure steps. The archive itself
//! is deleted once extracted.

use crate::error::{DepstrapError, Result};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tar::Archive;

/// Recognized tar-family archive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    TarBz2,
    Tar,
}

/// Classify an archive by file name.
pub fn detect_kind(path: &Path) -> Option<ArchiveKind> {
    let name = path.file_name()?.to_str()?;
    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        Some(ArchiveKind::TarGz)
    } else if name.ends_with(".tar.bz2") {
        Some(ArchiveKind::TarBz2)
    } else if name.ends_with(".tar") {
        Some(ArchiveKind::Tar)
    } else {
        None
    }
}

/// Extract an archive into `dest`, delete it, and return the source root.
///
/// Fails when the archive is not a recognized tar-family format, or when
/// `dest` ends up with zero or more than one top-level entry.
pub fn extract(archive_path: &Path, dest: &Path) -> Result<PathBuf> {
    let kind = detect_kind(archive_path).ok_or_else(|| DepstrapError::UnsupportedArchive {
        path: archive_path.to_path_buf(),
    })?;

    std::fs::create_dir_all(dest)?;

    let file = File::open(archive_path)?;
    let reader = BufReader::new(file);
    let unpack_result = match kind {
        ArchiveKind::TarGz => Archive::new(GzDecoder::new(reader)).unpack(dest),
        ArchiveKind::TarBz2 => Archive::new(BzDecoder::new(reader)).unpack(dest),
        ArchiveKind::Tar => Archive::new(reader).unpack(dest),
    };
    unpack_result.map_err(|e| DepstrapError::ExtractionFailed {
        path: archive_path.to_path_buf(),
        message: e.to_string(),
    })?;

    std::fs::remove_file(archive_path)?;

    source_root(dest)
}

/// The single top-level entry of an extraction target.
fn source_root(dest: &Path) -> Result<PathBuf> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dest)? {
        entries.push(entry?.path());
    }

    match entries.len() {
        1 => Ok(entries.remove(0)),
        n => Err(DepstrapError::AmbiguousSourceRoot {
            path: dest.to_path_buf(),
            entries: n,
        }),
    }
}
