//! Cross-compilation via the Go toolchain.
//!
//! Each target is built with `GOOS`/`GOARCH` selecting the platform and
//! `CGO_ENABLED=0` so no host C toolchain is involved for any entry.

use crate::error::{BuildError, Result};
use std::path::Path;
use std::process::Command;

/// Linker flags for a release build.
///
/// Always strips the symbol and DWARF tables (`-w -s`); when `version_var`
/// is configured, additionally bakes the release tag into it so the built
/// binary reports its own version.
pub fn release_ldflags(version_var: Option<&str>, tag: &str) -> String {
    match version_var {
        Some(var) => format!("-w -s -X {var}={tag}"),
        None => "-w -s".to_string(),
    }
}

/// Cross-compile one executable with `go build` in `repo`.
///
/// The executable is written into `repo` under `executable`; a non-zero
/// compiler exit aborts with the compiler's own stderr.
pub fn compile(repo: &Path, os: &str, arch: &str, executable: &str, ldflags: &str) -> Result<()> {
    log::info!("go build {os}/{arch} -> {executable}");

    let output = Command::new("go")
        .arg("build")
        .arg("-ldflags")
        .arg(ldflags)
        .arg("-o")
        .arg(executable)
        .env("GOOS", os)
        .env("GOARCH", arch)
        .env("CGO_ENABLED", "0")
        .current_dir(repo)
        .output()
        .map_err(|source| BuildError::Launch {
            command: "go build".to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(BuildError::CompileFailed {
            os: os.to_string(),
            arch: arch.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
        .into());
    }

    Ok(())
}
