//! # codecomet_release
//!
//! Release packager for the CodeComet CLI.
//!
//! Resolves the exact git tag at HEAD, cross-compiles the CLI for a
//! configured platform matrix (optionally merging the two mac builds into
//! a universal binary), and packages each executable as
//! `<program>-<tag>-<nickname>.zip` or `.tar.gz`.
//!
//! ## Behavior
//!
//! - **Exact tag required**: the current commit must carry exactly one
//!   tag; an untagged or multiply-tagged commit aborts before any build.
//! - **Cross-compilation forced**: every target builds with
//!   `CGO_ENABLED=0`, so no host C toolchain is involved.
//! - **First failure is final**: any failing external command aborts the
//!   remaining matrix with no partial-success reporting and no retry.
//!
//! ## Usage
//!
//! ```bash
//! codecomet_release                      # package the current directory
//! codecomet_release /path/to/checkout    # package another checkout
//! codecomet_release --matrix mac-only    # reproduce an older naming table
//! codecomet_release --config release.toml
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod matrix;
pub mod packager;
pub mod toolchain;

// Re-export main types for public API
pub use cli::Args;
pub use error::{ReleaseError, Result};
pub use matrix::{ArchiveFormat, Target, TargetMatrix, UniversalSpec};
pub use packager::{Packager, ReleaseArtifact};
