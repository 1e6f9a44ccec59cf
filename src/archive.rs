//! Single-file release archives.
//!
//! Each archive contains exactly one executable, stored with mode 0755 so
//! unpacking yields a runnable file. Linux releases ship as gzip-compressed
//! tarballs, everything else as zip.

use crate::error::{ArchiveError, Result};
use flate2::{Compression, write::GzEncoder};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File mode recorded for the executable entry
const EXECUTABLE_MODE: u32 = 0o755;

/// Create `archive` in `dir` containing the single file `executable`.
///
/// Returns the path of the written archive.
pub fn write_zip(dir: &Path, executable: &str, archive: &str) -> Result<PathBuf> {
    let archive_path = dir.join(archive);
    let exe_path = dir.join(executable);

    let file = File::create(&archive_path).map_err(|source| ArchiveError::Io {
        path: archive_path.clone(),
        source,
    })?;

    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(EXECUTABLE_MODE);

    writer
        .start_file(executable, options)
        .map_err(|source| ArchiveError::Zip {
            path: archive_path.clone(),
            source,
        })?;

    let mut src = File::open(&exe_path).map_err(|source| ArchiveError::Io {
        path: exe_path.clone(),
        source,
    })?;
    io::copy(&mut src, &mut writer).map_err(|source| ArchiveError::Io {
        path: archive_path.clone(),
        source,
    })?;

    writer.finish().map_err(|source| ArchiveError::Zip {
        path: archive_path.clone(),
        source,
    })?;

    log::debug!("Wrote {}", archive_path.display());
    Ok(archive_path)
}

/// Create the gzip-compressed tarball `archive` in `dir` containing the
/// single file `executable`.
///
/// Returns the path of the written archive.
pub fn write_tar_gz(dir: &Path, executable: &str, archive: &str) -> Result<PathBuf> {
    let archive_path = dir.join(archive);
    let exe_path = dir.join(executable);

    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| ArchiveError::Io { path, source }
    };

    let file = File::create(&archive_path).map_err(io_err(&archive_path))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut src = File::open(&exe_path).map_err(io_err(&exe_path))?;
    let metadata = src.metadata().map_err(io_err(&exe_path))?;

    let mut header = tar::Header::new_gnu();
    header.set_size(metadata.len());
    header.set_mode(EXECUTABLE_MODE);
    header.set_cksum();
    builder
        .append_data(&mut header, executable, &mut src)
        .map_err(io_err(&archive_path))?;

    let encoder = builder.into_inner().map_err(io_err(&archive_path))?;
    let mut file = encoder.finish().map_err(io_err(&archive_path))?;
    file.flush().map_err(io_err(&archive_path))?;

    log::debug!("Wrote {}", archive_path.display());
    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_holds_exactly_the_executable() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("codecomet"), b"\x7fELF fake binary").unwrap();

        let path = write_zip(tmp.path(), "codecomet", "codecomet-v1.2.3-macOS-arm64.zip").unwrap();
        assert_eq!(path, tmp.path().join("codecomet-v1.2.3-macOS-arm64.zip"));

        let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);

        let entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "codecomet");
        assert_eq!(entry.unix_mode(), Some(EXECUTABLE_MODE));
    }

    #[test]
    fn tar_gz_holds_exactly_the_executable() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("codecomet"), b"\x7fELF fake binary").unwrap();

        let path =
            write_tar_gz(tmp.path(), "codecomet", "codecomet-v1.2.3-linux-amd64.tar.gz").unwrap();

        let decoder = flate2::read::GzDecoder::new(File::open(&path).unwrap());
        let mut archive = tar::Archive::new(decoder);
        let entries: Vec<_> = archive.entries().unwrap().map(|e| e.unwrap()).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path().unwrap().to_str(), Some("codecomet"));
        assert_eq!(entries[0].header().mode().unwrap(), EXECUTABLE_MODE);
    }

    #[test]
    fn missing_executable_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(write_zip(tmp.path(), "codecomet", "out.zip").is_err());
        assert!(write_tar_gz(tmp.path(), "codecomet", "out.tar.gz").is_err());
    }
}
