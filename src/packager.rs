//! Release packaging orchestration.
//!
//! One linear pass, no branching beyond the per-target loop:
//! resolve-tag, preflight, optional universal mac build, then
//! compile-and-archive for each remaining target. The first failing
//! external command aborts the whole run; nothing is retried.

use crate::archive;
use crate::error::{BuildError, Result};
use crate::git;
use crate::matrix::{ArchiveFormat, TargetMatrix};
use crate::toolchain;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A produced release archive
#[derive(Debug, Clone)]
pub struct ReleaseArtifact {
    /// Platform nickname the archive was built for
    pub nickname: String,
    /// Path to the archive
    pub path: PathBuf,
    /// Archive size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 checksum of the archive
    pub checksum: String,
}

/// Sequential release packager over a target matrix.
///
/// Compilation and archiving for each target run to completion before the
/// next begins; the repository directory is written append-only (new files
/// per target). The only cleanup performed is removal of the
/// single-architecture intermediates after a universal mac merge.
#[derive(Debug)]
pub struct Packager {
    matrix: TargetMatrix,
    repo: PathBuf,
}

impl Packager {
    /// Create a packager for the given matrix and repository directory
    pub fn new(matrix: TargetMatrix, repo: impl Into<PathBuf>) -> Self {
        Self {
            matrix,
            repo: repo.into(),
        }
    }

    /// Resolve the release tag, then build and package every configured
    /// target.
    ///
    /// Returns the produced archives in build order. Tag resolution runs
    /// first so an untagged commit aborts with zero build side effects.
    pub fn run(&self) -> Result<Vec<ReleaseArtifact>> {
        let tag = git::resolve_exact_tag(&self.repo)?;
        self.preflight()?;

        log::info!("Packaging {} {tag}", self.matrix.program);

        let ldflags = toolchain::release_ldflags(self.matrix.version_var.as_deref(), &tag);
        let mut artifacts = Vec::new();

        if let Some(universal) = &self.matrix.universal {
            let mut intermediates = Vec::new();
            for arch in &universal.arches {
                let name = universal.intermediate_name(arch);
                toolchain::compile(&self.repo, &universal.os, arch, &name, &ldflags)?;
                intermediates.push(name);
            }

            toolchain::merge_universal(&self.repo, &intermediates, &universal.executable)?;

            let archive_name = universal.archive_name(&self.matrix.program, &tag);
            let path =
                self.write_archive(universal.format, &universal.executable, &archive_name)?;

            // Only the merged binary ships; drop the per-arch builds.
            for name in &intermediates {
                std::fs::remove_file(self.repo.join(name))?;
            }

            artifacts.push(self.artifact(universal.nickname.clone(), path)?);
        }

        for target in &self.matrix.targets {
            toolchain::compile(&self.repo, &target.os, &target.arch, &target.executable, &ldflags)?;

            let archive_name = target.archive_name(&self.matrix.program, &tag);
            let path = self.write_archive(target.format, &target.executable, &archive_name)?;
            artifacts.push(self.artifact(target.nickname.clone(), path)?);
        }

        Ok(artifacts)
    }

    /// Verify the required toolchain binaries are on PATH before compiling
    /// anything, so a missing tool fails fast with an actionable message.
    fn preflight(&self) -> Result<()> {
        let go = which::which("go").map_err(|_| BuildError::MissingTool {
            tool: "go".to_string(),
        })?;
        log::debug!("Found go at {}", go.display());

        if self.matrix.universal.is_some() {
            let lipo = which::which("lipo").map_err(|_| BuildError::MissingTool {
                tool: "lipo".to_string(),
            })?;
            log::debug!("Found lipo at {}", lipo.display());
        }

        Ok(())
    }

    fn write_archive(
        &self,
        format: ArchiveFormat,
        executable: &str,
        archive_name: &str,
    ) -> Result<PathBuf> {
        match format {
            ArchiveFormat::Zip => archive::write_zip(&self.repo, executable, archive_name),
            ArchiveFormat::TarGz => archive::write_tar_gz(&self.repo, executable, archive_name),
        }
    }

    fn artifact(&self, nickname: String, path: PathBuf) -> Result<ReleaseArtifact> {
        let size = std::fs::metadata(&path)?.len();
        let checksum = sha256_file(&path)?;
        log::info!("Created {} ({size} bytes)", path.display());

        Ok(ReleaseArtifact {
            nickname,
            path,
            size,
            checksum,
        })
    }
}

/// SHA-256 of a file, hex encoded. Read in 8 KiB chunks.
fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
