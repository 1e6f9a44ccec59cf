//! TOML target-matrix files.
//!
//! The built-in matrices in [`crate::matrix`] cover the shipped release
//! processes; a TOML file makes new targets or naming changes additive
//! configuration instead of code edits:
//!
//! ```toml
//! program = "codecomet"
//! version-var = "github.com/codecomet-io/cli/cmd.CurrentVersion"
//!
//! [[target]]
//! os = "linux"
//! arch = "amd64"
//! nickname = "linux-amd64"
//! format = "tar.gz"
//!
//! [universal]
//! arches = ["amd64", "arm64"]
//! ```
//!
//! `executable` defaults to the program name (with `.exe` appended for
//! windows targets); the universal build defaults to a zipped
//! `osx-universal` darwin merge.

use crate::error::{ConfigError, Result};
use crate::matrix::{ArchiveFormat, Target, TargetMatrix, UniversalSpec};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct MatrixFile {
    program: String,
    version_var: Option<String>,
    #[serde(default)]
    target: Vec<TargetEntry>,
    universal: Option<UniversalEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetEntry {
    os: String,
    arch: String,
    nickname: String,
    executable: Option<String>,
    format: ArchiveFormat,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UniversalEntry {
    #[serde(default = "default_universal_os")]
    os: String,
    arches: Vec<String>,
    #[serde(default = "default_universal_nickname")]
    nickname: String,
    executable: Option<String>,
    #[serde(default = "default_universal_format")]
    format: ArchiveFormat,
}

fn default_universal_os() -> String {
    "darwin".to_string()
}

fn default_universal_nickname() -> String {
    "osx-universal".to_string()
}

fn default_universal_format() -> ArchiveFormat {
    ArchiveFormat::Zip
}

fn default_executable(program: &str, os: &str) -> String {
    if os == "windows" {
        format!("{program}.exe")
    } else {
        program.to_string()
    }
}

/// Load a target matrix from a TOML file.
pub fn load_matrix(path: &Path) -> Result<TargetMatrix> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let file: MatrixFile = toml::from_str(&raw).map_err(|source| ConfigError::ParseFailed {
        path: path.to_path_buf(),
        source,
    })?;

    if file.target.is_empty() && file.universal.is_none() {
        return Err(ConfigError::EmptyMatrix.into());
    }

    let MatrixFile {
        program,
        version_var,
        target,
        universal,
    } = file;

    let targets = target
        .into_iter()
        .map(|entry| {
            let executable = entry
                .executable
                .unwrap_or_else(|| default_executable(&program, &entry.os));
            Target::new(entry.os, entry.arch, entry.nickname, executable, entry.format)
        })
        .collect();

    let universal = universal.map(|entry| UniversalSpec {
        executable: entry.executable.unwrap_or_else(|| program.clone()),
        os: entry.os,
        arches: entry.arches,
        nickname: entry.nickname,
        format: entry.format,
    });

    log::debug!("Loaded target matrix from {}", path.display());

    Ok(TargetMatrix {
        program,
        version_var,
        universal,
        targets,
    })
}
