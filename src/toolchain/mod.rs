//! External toolchain invocations: the Go cross-compiler and `lipo`.

mod compile;
mod lipo;

pub use compile::{compile, release_ldflags};
pub use lipo::merge_universal;
