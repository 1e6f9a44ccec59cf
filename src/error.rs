//! Error types for release packaging operations.
//!
//! Every failure mode is fatal: the first failing external command or IO
//! operation aborts the run, surfaced with the command's own diagnostics.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release packaging operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release packaging operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Git tag resolution errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Cross-compilation and universal-merge errors
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Archive creation errors
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// Target matrix configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git tag resolution errors
#[derive(Error, Debug)]
pub enum GitError {
    /// No tag points at the current commit
    #[error("no tag points at HEAD; releases are built from an exactly tagged commit")]
    NoExactTag,

    /// More than one tag points at the current commit
    #[error("multiple tags point at HEAD ({tags:?}); exactly one release tag is required")]
    AmbiguousTag {
        /// All tags found at HEAD
        tags: Vec<String>,
    },

    /// git could not be started
    #[error("failed to run git: {source}")]
    Launch {
        /// Underlying launch error
        #[source]
        source: std::io::Error,
    },

    /// git exited with a failure
    #[error("git {operation} failed: {stderr}")]
    CommandFailed {
        /// Git subcommand that failed
        operation: String,
        /// Captured stderr from git
        stderr: String,
    },
}

/// Cross-compilation and universal-merge errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// A required toolchain binary is not on PATH
    #[error("required tool '{tool}' not found in PATH")]
    MissingTool {
        /// Tool name
        tool: String,
    },

    /// A toolchain binary could not be started
    #[error("failed to run {command}: {source}")]
    Launch {
        /// Command that could not be started
        command: String,
        /// Underlying launch error
        #[source]
        source: std::io::Error,
    },

    /// The compiler exited with a failure
    #[error("go build failed for {os}/{arch}:\n{stderr}")]
    CompileFailed {
        /// Target operating system
        os: String,
        /// Target architecture
        arch: String,
        /// Captured stderr from the compiler
        stderr: String,
    },

    /// The binary-merge utility exited with a failure
    #[error("lipo failed to create {output}:\n{stderr}")]
    MergeFailed {
        /// Intended merged executable name
        output: String,
        /// Captured stderr from lipo
        stderr: String,
    },
}

/// Archive creation errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Zip writing failed
    #[error("zip write failed for {path}: {source}")]
    Zip {
        /// Archive being written
        path: PathBuf,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// Archive IO failed
    #[error("archive IO failed for {path}: {source}")]
    Io {
        /// File involved in the failure
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Target matrix configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Matrix file could not be read
    #[error("failed to read matrix file {path}: {source}")]
    ReadFailed {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Matrix file is not valid TOML or violates the schema
    #[error("failed to parse matrix file {path}: {source}")]
    ParseFailed {
        /// File that could not be parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Matrix declares no targets at all
    #[error("matrix declares neither targets nor a universal build")]
    EmptyMatrix,
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Unknown built-in matrix name
    #[error("unknown matrix '{name}' (expected one of: current, osx-universal-cross, mac-only)")]
    UnknownMatrix {
        /// Requested matrix name
        name: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Git(GitError::NoExactTag) => vec![
                "Tag the current commit: git tag v<version>".to_string(),
                "Or check out the tagged release commit before packaging".to_string(),
            ],
            ReleaseError::Git(GitError::AmbiguousTag { tags }) => vec![format!(
                "Delete the tags that are not being released: {}",
                tags.join(", ")
            )],
            ReleaseError::Build(BuildError::MissingTool { tool }) => vec![
                format!("Install '{tool}' and ensure it is on PATH"),
                "The universal mac build additionally requires Xcode Command Line Tools"
                    .to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
