//! Tests for TOML target-matrix loading.

use codecomet_release::config::load_matrix;
use codecomet_release::error::{ConfigError, ReleaseError};
use codecomet_release::matrix::ArchiveFormat;
use std::io::Write;

fn write_matrix(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_a_full_matrix() {
    let file = write_matrix(
        r#"
program = "codecomet"
version-var = "github.com/codecomet-io/cli/cmd.CurrentVersion"

[[target]]
os = "linux"
arch = "amd64"
nickname = "linux-amd64"
format = "tar.gz"

[[target]]
os = "windows"
arch = "amd64"
nickname = "win64"
format = "zip"

[universal]
arches = ["amd64", "arm64"]
"#,
    );

    let matrix = load_matrix(file.path()).unwrap();
    assert_eq!(matrix.program, "codecomet");
    assert_eq!(
        matrix.version_var.as_deref(),
        Some("github.com/codecomet-io/cli/cmd.CurrentVersion")
    );

    assert_eq!(matrix.targets.len(), 2);
    assert_eq!(matrix.targets[0].executable, "codecomet");
    assert_eq!(matrix.targets[0].format, ArchiveFormat::TarGz);
    // windows gets the .exe suffix by default
    assert_eq!(matrix.targets[1].executable, "codecomet.exe");

    let universal = matrix.universal.unwrap();
    assert_eq!(universal.os, "darwin");
    assert_eq!(universal.nickname, "osx-universal");
    assert_eq!(universal.executable, "codecomet");
    assert_eq!(universal.format, ArchiveFormat::Zip);
}

#[test]
fn empty_matrix_is_rejected() {
    let file = write_matrix(r#"program = "codecomet""#);
    let err = load_matrix(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ReleaseError::Config(ConfigError::EmptyMatrix)
    ));
}

#[test]
fn unknown_archive_format_is_rejected() {
    let file = write_matrix(
        r#"
program = "codecomet"

[[target]]
os = "linux"
arch = "amd64"
nickname = "linux-amd64"
format = "rar"
"#,
    );

    let err = load_matrix(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ReleaseError::Config(ConfigError::ParseFailed { .. })
    ));
}

#[test]
fn missing_file_is_rejected() {
    let err = load_matrix(std::path::Path::new("/nonexistent/release.toml")).unwrap_err();
    assert!(matches!(
        err,
        ReleaseError::Config(ConfigError::ReadFailed { .. })
    ));
}
