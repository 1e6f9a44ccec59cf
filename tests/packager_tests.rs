//! End-to-end failure-semantics tests.
//!
//! The build steps need the Go toolchain, so these tests exercise the part
//! of the pipeline that must run (and fail) before any compiler
//! invocation: argument validation and exact-tag resolution.

use assert_cmd::Command;
use codecomet_release::error::{GitError, ReleaseError};
use codecomet_release::git::resolve_exact_tag;
use predicates::prelude::*;
use std::path::Path;

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git must be available for these tests");
    assert!(status.success(), "git {args:?} failed");
}

fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(
        dir,
        &[
            "-c",
            "user.name=release-test",
            "-c",
            "user.email=release-test@example.com",
            "commit",
            "--allow-empty",
            "-q",
            "-m",
            "initial commit",
        ],
    );
}

/// Everything in `dir` except the `.git` directory.
fn work_tree_entries(dir: &Path) -> Vec<String> {
    let mut entries: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name != ".git")
        .collect();
    entries.sort();
    entries
}

#[test]
fn untagged_commit_aborts_with_zero_build_side_effects() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path());

    Command::cargo_bin("codecomet_release")
        .unwrap()
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tag points at HEAD"));

    // No executables, no archives, nothing.
    assert_eq!(work_tree_entries(tmp.path()), Vec::<String>::new());
}

#[test]
fn multiple_tags_at_head_abort() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path());
    git(tmp.path(), &["tag", "v1.0.0"]);
    git(tmp.path(), &["tag", "v1.0.1"]);

    Command::cargo_bin("codecomet_release")
        .unwrap()
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiple tags point at HEAD"));

    assert_eq!(work_tree_entries(tmp.path()), Vec::<String>::new());
}

#[test]
fn single_tag_resolves_exactly() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path());
    git(tmp.path(), &["tag", "v1.2.3"]);

    assert_eq!(resolve_exact_tag(tmp.path()).unwrap(), "v1.2.3");
}

#[test]
fn tag_on_an_ancestor_does_not_count() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path());
    git(tmp.path(), &["tag", "v1.0.0"]);
    git(
        tmp.path(),
        &[
            "-c",
            "user.name=release-test",
            "-c",
            "user.email=release-test@example.com",
            "commit",
            "--allow-empty",
            "-q",
            "-m",
            "follow-up commit",
        ],
    );

    let err = resolve_exact_tag(tmp.path()).unwrap_err();
    assert!(matches!(err, ReleaseError::Git(GitError::NoExactTag)));
}

#[test]
fn outside_a_repository_tag_resolution_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let err = resolve_exact_tag(tmp.path()).unwrap_err();
    assert!(matches!(err, ReleaseError::Git(_)));
}

#[test]
fn unknown_builtin_matrix_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    Command::cargo_bin("codecomet_release")
        .unwrap()
        .arg(tmp.path())
        .arg("--matrix")
        .arg("win32")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown matrix"));
}

#[test]
fn nonexistent_repository_path_is_rejected() {
    Command::cargo_bin("codecomet_release")
        .unwrap()
        .arg("/nonexistent/checkout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
