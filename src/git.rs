//! Exact-tag resolution at HEAD.
//!
//! The release tag is whatever single tag points at the current commit.
//! `git describe --exact-match` silently picks one tag when several point
//! at HEAD, so the tags are listed instead and more than one is rejected.

use crate::error::{GitError, Result};
use std::path::Path;
use std::process::Command;

/// Resolve the single release tag pointing at HEAD in `repo`.
///
/// # Errors
/// - No tag points at HEAD (untagged commit)
/// - More than one tag points at HEAD
/// - git is missing or the directory is not a repository
pub fn resolve_exact_tag(repo: &Path) -> Result<String> {
    let output = Command::new("git")
        .arg("tag")
        .arg("--points-at")
        .arg("HEAD")
        .current_dir(repo)
        .output()
        .map_err(|source| GitError::Launch { source })?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            operation: "tag --points-at HEAD".to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut tags: Vec<String> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    match tags.len() {
        0 => Err(GitError::NoExactTag.into()),
        1 => {
            let tag = tags.remove(0);
            log::info!("Resolved release tag {tag}");
            Ok(tag)
        }
        _ => Err(GitError::AmbiguousTag { tags }.into()),
    }
}
