//! Universal binary creation for macOS (Intel + Apple Silicon).
//!
//! Merges the single-architecture release builds into one fat executable
//! using Apple's `lipo` tool. The loader picks the matching slice at run
//! time, so one archive serves both mac architectures.

use crate::error::{BuildError, Result};
use std::path::Path;
use std::process::Command;

/// Merge single-architecture executables into one universal binary.
///
/// `inputs` and `output` are file names relative to `repo`; the inputs
/// must already exist (built for the same OS, one per architecture).
///
/// # Errors
/// - lipo is not installed or cannot be started
/// - lipo rejects the inputs (missing file, architecture mismatch)
pub fn merge_universal(repo: &Path, inputs: &[String], output: &str) -> Result<()> {
    log::info!("lipo -create {} -> {output}", inputs.join(" "));

    let mut cmd = Command::new("lipo");
    cmd.arg("-create");
    for input in inputs {
        cmd.arg(input);
    }
    cmd.arg("-output").arg(output).current_dir(repo);

    let merged = cmd.output().map_err(|source| BuildError::Launch {
        command: "lipo".to_string(),
        source,
    })?;

    if !merged.status.success() {
        return Err(BuildError::MergeFailed {
            output: output.to_string(),
            stderr: String::from_utf8_lossy(&merged.stderr).to_string(),
        }
        .into());
    }

    // lipo -info prints the architectures baked into the result
    let verify = Command::new("lipo")
        .arg("-info")
        .arg(output)
        .current_dir(repo)
        .output()
        .map_err(|source| BuildError::Launch {
            command: "lipo -info".to_string(),
            source,
        })?;

    if verify.status.success() {
        log::info!("{}", String::from_utf8_lossy(&verify.stdout).trim());
    }

    Ok(())
}
