//! Command line argument parsing and validation.
//!
//! The tool is designed to "just work": run it from a tagged checkout and
//! it builds and packages every configured platform.

use clap::Parser;
use std::path::PathBuf;

/// Release packager for the CodeComet CLI
#[derive(Parser, Debug)]
#[command(
    name = "codecomet_release",
    version,
    about = "Cross-compile and package tagged CodeComet release builds",
    long_about = "Resolve the release tag at HEAD, cross-compile the CLI for every \
configured platform (merging the mac builds into a universal binary where \
configured), and package each build as <program>-<tag>-<nickname>.zip or .tar.gz.

Usage:
  codecomet_release
  codecomet_release /path/to/checkout
  codecomet_release --config release.toml"
)]
pub struct Args {
    /// Repository to build and package (defaults to the current directory)
    #[arg(index = 1, value_name = "REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Load the target matrix from a TOML file instead of a built-in table
    #[arg(long, value_name = "PATH", conflicts_with = "matrix")]
    pub config: Option<PathBuf>,

    /// Built-in matrix to use: current, osx-universal-cross, or mac-only
    #[arg(long, value_name = "NAME", default_value = "current")]
    pub matrix: String,

    /// Suppress progress output (errors are still shown)
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.repo.is_dir() {
            return Err(format!(
                "repository path {} is not a directory",
                self.repo.display()
            ));
        }

        Ok(())
    }
}
