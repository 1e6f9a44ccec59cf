//! Command line interface for codecomet_release.
//!
//! Parses arguments, selects or loads the target matrix, runs the
//! packager, and reports the produced archives.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::config;
use crate::error::{CliError, Result};
use crate::matrix::TargetMatrix;
use crate::packager::Packager;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let output = OutputManager::new(args.quiet);

    let matrix = match &args.config {
        Some(path) => config::load_matrix(path)?,
        None => {
            TargetMatrix::by_name(&args.matrix).ok_or_else(|| CliError::UnknownMatrix {
                name: args.matrix.clone(),
            })?
        }
    };

    output.section(&format!("Packaging {}", matrix.program));

    let packager = Packager::new(matrix, &args.repo);
    let artifacts = packager.run()?;

    output.success(&format!("Created {} release archive(s)", artifacts.len()));
    for artifact in &artifacts {
        output.indent(&format!(
            "{}  {} bytes  sha256:{}",
            artifact.path.display(),
            artifact.size,
            artifact.checksum
        ));
    }

    Ok(0)
}
